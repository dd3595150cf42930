use thiserror::Error;

use crate::{CellCount, Coord};

/// Reasons a board configuration is rejected before any cell is created.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: Coord, height: Coord },
    #[error("Cell pixel size must be positive")]
    EmptyCell,
    #[error("Mine density must be within [0, 1), got {0}")]
    InvalidDensity(f32),
    #[error("Too many mines: {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Mine layout has {actual} mines, but {requested} were requested")]
    MineCountMismatch {
        requested: CellCount,
        actual: CellCount,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Game is still in progress")]
    NotFinished,
}

pub type Result<T> = core::result::Result<T, GameError>;
