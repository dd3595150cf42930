use serde::{Deserialize, Serialize};

use crate::*;

/// What a cell turns out to hold once uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Bomb,
    Empty,
    /// Number of adjacent bombs, always in `1..=8`.
    Count(u8),
}

impl Content {
    /// Maps an adjacent-bomb count to content, zero being [`Content::Empty`].
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            n => Self::Count(n),
        }
    }

    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    /// Adjacent-bomb count, `None` for bombs.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Bomb => None,
            Self::Empty => Some(0),
            Self::Count(n) => Some(n),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Empty
    }
}

/// One board position and everything a frontend needs to draw and hit-test it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) coords: Coord2,
    pub(crate) content: Content,
    pub(crate) covered: bool,
    pub(crate) flagged: bool,
    pub(crate) misflagged: bool,
    pub(crate) rect: Rect,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            coords: (0, 0),
            content: Content::default(),
            covered: true,
            flagged: false,
            misflagged: false,
            rect: Rect::default(),
        }
    }
}

impl Placed for Cell {
    fn place(&mut self, coords: Coord2) {
        self.coords = coords;
    }
}

impl Cell {
    /// A covered, unflagged prototype whose on-screen rectangle is `size × size`.
    pub fn sized(size: u32) -> Self {
        Self {
            rect: Rect::new(Point::default(), size, size),
            ..Self::default()
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn content(&self) -> Content {
        self.content
    }

    pub const fn is_covered(&self) -> bool {
        self.covered
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Set by end-of-game disclosure on flagged cells that hold no bomb.
    pub const fn is_misflagged(&self) -> bool {
        self.misflagged
    }

    pub const fn rect(&self) -> Rect {
        self.rect
    }
}
