use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where the mines are on a board, independent of what the player has uncovered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Grid<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Grid<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines at exactly `mine_coords`; duplicates are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask = Grid::from_elem(size, false)?;

        for &coords in mine_coords {
            *mine_mask.get_mut(coords).ok_or(GameError::InvalidCoords)? = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.mine_mask.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        self.mine_mask.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.total_cells()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask.get(coords).copied().unwrap_or(false)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn content_at(&self, coords: Coord2) -> Content {
        if self.contains_mine(coords) {
            Content::Bomb
        } else {
            Content::from_count(self.adjacent_mine_count(coords))
        }
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|(coords, _)| coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords]
    }
}
