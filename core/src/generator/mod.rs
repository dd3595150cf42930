use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts for new boards.
///
/// Generators are called once per game, so stateful ones should produce a fresh layout on every
/// call.
pub trait MineGenerator {
    fn generate(&mut self, size: Coord2, mines: CellCount) -> Result<MineLayout>;
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn generate(&mut self, size: Coord2, mines: CellCount) -> Result<MineLayout> {
        (**self).generate(size, mines)
    }
}
