use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_DENSITY: f32 = 0.15;
pub const DEFAULT_CELL_SIZE: u32 = 40;
pub const DEFAULT_MARGIN: u32 = 10;

/// Everything needed to build a board: its shape, how dense the mines are, and where the
/// cells sit on screen.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub cell_pixel_size: u32,
    pub margin: u32,
    pub mine_density: f32,
    #[serde(default)]
    pub origin: Point,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            cell_pixel_size: DEFAULT_CELL_SIZE,
            margin: DEFAULT_MARGIN,
            mine_density: DEFAULT_DENSITY,
            origin: Point::default(),
        }
    }
}

impl GameConfig {
    pub const fn new(width: Coord, height: Coord, mine_density: f32) -> Self {
        Self {
            width,
            height,
            cell_pixel_size: DEFAULT_CELL_SIZE,
            margin: DEFAULT_MARGIN,
            mine_density,
            origin: Point::new(0, 0),
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// `floor(width × height × density)`, after checking the configuration can produce a board.
    pub fn mine_count(&self) -> Result<CellCount> {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height }.into());
        }
        if self.cell_pixel_size == 0 {
            return Err(ConfigError::EmptyCell.into());
        }
        if !self.mine_density.is_finite() || !(0.0..1.0).contains(&self.mine_density) {
            return Err(ConfigError::InvalidDensity(self.mine_density).into());
        }

        let cells = self.total_cells();
        // single-precision product, non-negative, so truncation is floor
        let mines = (f32::from(cells) * self.mine_density) as CellCount;
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells }.into());
        }
        Ok(mines)
    }

    pub fn validate(&self) -> Result<()> {
        self.mine_count().map(|_| ())
    }

    pub const fn layout(&self) -> Layout {
        Layout {
            origin: self.origin,
            cell_size: self.cell_pixel_size,
            margin: self.margin,
        }
    }
}
