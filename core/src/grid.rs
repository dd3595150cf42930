use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Entities that remember where on the grid they live.
pub trait Placed {
    fn place(&mut self, coords: Coord2);
}

/// Rectangular container of `width × height` entities addressed by `(x, y)`.
///
/// Carries no game semantics. The first axis of the backing array is `x`, the second is `y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    cells: Array2<T>,
}

fn check_size((width, height): Coord2) -> Result<()> {
    if width == 0 || height == 0 {
        Err(ConfigError::EmptyBoard { width, height }.into())
    } else {
        Ok(())
    }
}

impl<T: Clone + Placed> Grid<T> {
    /// Fills the grid with copies of `prototype`, each tagged with its own coordinates.
    pub fn from_prototype(size: Coord2, prototype: T) -> Result<Self> {
        check_size(size)?;
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let mut cell = prototype.clone();
            cell.place((x as Coord, y as Coord));
            cell
        });
        Ok(Self { cells })
    }
}

impl<T: Clone> Grid<T> {
    pub fn from_elem(size: Coord2, elem: T) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            cells: Array2::from_elem(size.to_nd_index(), elem),
        })
    }
}

impl<T> Grid<T> {
    pub fn size(&self) -> Coord2 {
        let (width, height) = self.cells.dim();
        (width as Coord, height as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    pub fn get(&self, coords: Coord2) -> Option<&T> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut T> {
        self.cells.get_mut(coords.to_nd_index())
    }

    /// Coordinates of the up to 8 cells surrounding `coords`, clipped to the grid.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// The cells surrounding `coords`, in the same order as [`Grid::neighbors`].
    pub fn neighbors_of(&self, coords: Coord2) -> SmallVec<[&T; 8]> {
        self.neighbors(coords).map(|pos| &self[pos]).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coord2, &T)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn indexed_iter_mut(&mut self) -> impl Iterator<Item = (Coord2, &mut T)> {
        self.cells
            .indexed_iter_mut()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }
}

impl<T> Index<Coord2> for Grid<T> {
    type Output = T;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl<T> IndexMut<Coord2> for Grid<T> {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tagged {
        coords: Option<Coord2>,
        label: u8,
    }

    impl Placed for Tagged {
        fn place(&mut self, coords: Coord2) {
            self.coords = Some(coords);
        }
    }

    #[test]
    fn from_prototype_tags_every_cell() {
        let prototype = Tagged {
            coords: None,
            label: 7,
        };
        let grid = Grid::from_prototype((4, 3), prototype).unwrap();

        assert_eq!(grid.size(), (4, 3));
        assert_eq!(grid.total_cells(), 12);
        for (coords, cell) in grid.indexed_iter() {
            assert_eq!(cell.coords, Some(coords));
            assert_eq!(cell.label, 7);
        }
    }

    #[test]
    fn from_prototype_rejects_empty_dimensions() {
        let err = Grid::from_prototype((0, 3), Tagged::default()).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidConfiguration(ConfigError::EmptyBoard {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::from_elem((3, 0), false).is_err());
    }

    #[test]
    fn neighbors_of_returns_cells_around_corner() {
        let grid = Grid::from_prototype((3, 3), Tagged::default()).unwrap();

        let coords: Vec<_> = grid
            .neighbors_of((2, 2))
            .iter()
            .map(|cell| cell.coords.unwrap())
            .collect();

        assert_eq!(coords, [(1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn neighbors_outside_grid_are_empty() {
        let grid = Grid::from_elem((3, 3), 0u8).unwrap();

        assert_eq!(grid.neighbors((3, 3)).count(), 0);
        assert!(grid.neighbors_of((1, 3)).is_empty());
    }

    #[test]
    fn get_is_bounds_checked() {
        let mut grid = Grid::from_elem((2, 2), 0u8).unwrap();

        assert!(grid.get((2, 0)).is_none());
        assert!(grid.get_mut((0, 2)).is_none());
        assert!(!grid.contains((5, 5)));

        *grid.get_mut((1, 1)).unwrap() = 3;
        assert_eq!(grid[(1, 1)], 3);
    }
}
