use alloc::collections::BTreeSet;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Draws `mines` distinct coordinates uniformly from a `size` board.
///
/// Uses rejection sampling: a coordinate that was already drawn is discarded and drawn again.
/// Fails instead of spinning forever when the mines cannot all fit.
pub fn place_mines<R: Rng + ?Sized>(
    rng: &mut R,
    (width, height): Coord2,
    mines: CellCount,
) -> Result<MineLayout> {
    let cells = mult(width, height);
    if width == 0 || height == 0 {
        return Err(ConfigError::EmptyBoard { width, height }.into());
    }
    if mines >= cells {
        log::warn!(
            "Refusing to place {} mines on a board of {} cells",
            mines,
            cells
        );
        return Err(ConfigError::TooManyMines { mines, cells }.into());
    }

    let mut used = BTreeSet::new();
    while used.len() < usize::from(mines) {
        let coords = (rng.random_range(0..width), rng.random_range(0..height));
        if !used.insert(coords) {
            log::trace!("Redrawing repeated mine position {:?}", coords);
        }
    }

    let mut mine_mask = Grid::from_elem((width, height), false)?;
    for coords in used {
        mine_mask[coords] = true;
    }
    Ok(MineLayout::from_mine_mask(mine_mask))
}

/// Purely random generation from a seeded [`SmallRng`].
///
/// The same seed yields the same sequence of layouts, one per [`MineGenerator::generate`] call.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, size: Coord2, mines: CellCount) -> Result<MineLayout> {
        place_mines(&mut self.rng, size, mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        let mut generator = RandomMineGenerator::new(7);

        for (size, mines) in [((9, 9), 12), ((3, 3), 1), ((16, 30), 72), ((2, 2), 3)] {
            let layout = generator.generate(size, mines).unwrap();
            assert_eq!(layout.size(), size);
            assert_eq!(layout.mine_count(), mines);
            assert_eq!(layout.mine_coords().count(), usize::from(mines));
        }
    }

    #[test]
    fn same_seed_same_layouts() {
        let mut a = RandomMineGenerator::new(42);
        let mut b = RandomMineGenerator::new(42);

        assert_eq!(a.generate((9, 9), 10), b.generate((9, 9), 10));
        assert_eq!(a.generate((9, 9), 10), b.generate((9, 9), 10));
    }

    #[test]
    fn full_board_is_rejected() {
        let mut generator = RandomMineGenerator::new(0);

        assert_eq!(
            generator.generate((3, 3), 9),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyMines {
                mines: 9,
                cells: 9
            }))
        );
        assert!(generator.generate((3, 3), 10).is_err());
    }

    #[test]
    fn accepts_any_rng() {
        let mut rng = SmallRng::seed_from_u64(3);

        let layout = place_mines(&mut rng, (4, 4), 0).unwrap();

        assert_eq!(layout.mine_count(), 0);
    }
}
