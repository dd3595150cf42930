use alloc::vec::Vec;

use super::*;

/// Places mines at a predetermined set of coordinates. The requested count must match the
/// number of distinct coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mine_coords: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mine_coords: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mine_coords: mine_coords.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, size: Coord2, mines: CellCount) -> Result<MineLayout> {
        let layout = MineLayout::from_mine_coords(size, &self.mine_coords)?;
        if layout.mine_count() != mines {
            log::warn!(
                "Fixed layout mine count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                mines
            );
            return Err(ConfigError::MineCountMismatch {
                requested: mines,
                actual: layout.mine_count(),
            }
            .into());
        }
        Ok(layout)
    }
}
