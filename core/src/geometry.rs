//! Screen-space positions and the rectangles cells occupy on screen.

use serde::{Deserialize, Serialize};

use crate::*;

/// A pixel position on screen. Clicks may land anywhere, including off the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Point,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(pos: Point, width: u32, height: u32) -> Self {
        Self { pos, width, height }
    }

    /// Half-open containment: the left and top edges are inside, the right and bottom are not.
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (left, top) = (i64::from(self.pos.x), i64::from(self.pos.y));
        px >= left
            && px < left + i64::from(self.width)
            && py >= top
            && py < top + i64::from(self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            offset(self.pos.x, i64::from(self.width / 2)),
            offset(self.pos.y, i64::from(self.height / 2)),
        )
    }
}

fn offset(base: i32, delta: i64) -> i32 {
    let value = i64::from(base) + delta;
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Places square cells on screen, anchored at the top-left corner of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub origin: Point,
    pub cell_size: u32,
    pub margin: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            cell_size: DEFAULT_CELL_SIZE,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Layout {
    fn stride(&self) -> i64 {
        i64::from(self.cell_size) + i64::from(self.margin)
    }

    pub fn rect_at(&self, (x, y): Coord2) -> Rect {
        let pos = Point::new(
            offset(self.origin.x, i64::from(x) * self.stride()),
            offset(self.origin.y, i64::from(y) * self.stride()),
        );
        Rect::new(pos, self.cell_size, self.cell_size)
    }

    /// Total pixel extent of a board of `size` cells; margins only sit between cells.
    pub fn board_pixel_size(&self, (width, height): Coord2) -> (u64, u64) {
        let extent = |cells: Coord| {
            let cells = u64::from(cells);
            cells * u64::from(self.cell_size) + cells.saturating_sub(1) * u64::from(self.margin)
        };
        (extent(width), extent(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(Point::new(10, 20), 40, 40);

        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(49, 59)));
        assert!(!rect.contains(Point::new(50, 30)));
        assert!(!rect.contains(Point::new(30, 60)));
        assert!(!rect.contains(Point::new(9, 30)));
    }

    #[test]
    fn layout_steps_by_cell_and_margin() {
        let layout = Layout {
            origin: Point::new(5, 5),
            cell_size: 40,
            margin: 10,
        };

        assert_eq!(layout.rect_at((0, 0)).pos, Point::new(5, 5));
        assert_eq!(layout.rect_at((2, 1)).pos, Point::new(105, 55));
        assert_eq!(layout.rect_at((2, 1)).center(), Point::new(125, 75));
        assert_eq!(layout.board_pixel_size((9, 9)), (440, 440));
        assert_eq!(layout.board_pixel_size((1, 2)), (40, 90));
    }
}
