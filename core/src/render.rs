//! Drawing contract between the engine and whatever puts pixels (or characters) on screen.
//!
//! The engine never draws. [`Renderer`] walks the board, decides which [`Sprite`] each cell shows
//! and hands it to a caller-supplied [`Canvas`].

use serde::{Deserialize, Serialize};

use crate::*;

/// How a single cell looks right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Covered,
    Flagged,
    /// Uncovered safe cell with its adjacent-mine count, `0` for empty.
    Open(u8),
    Bomb,
    /// The mine whose reveal lost the game.
    TriggeredBomb,
    /// A flag left on a safe cell after the game ended.
    Misflagged,
}

/// Receives one call per drawn cell.
pub trait Canvas {
    fn draw(&mut self, rect: Rect, coords: Coord2, sprite: Sprite);
}

impl<F: FnMut(Rect, Coord2, Sprite)> Canvas for F {
    fn draw(&mut self, rect: Rect, coords: Coord2, sprite: Sprite) {
        self(rect, coords, sprite)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn sprite_for(cell: &Cell, triggered_mine: Option<Coord2>) -> Sprite {
        if cell.is_misflagged() {
            return Sprite::Misflagged;
        }
        if cell.is_covered() {
            return if cell.is_flagged() {
                Sprite::Flagged
            } else {
                Sprite::Covered
            };
        }
        match cell.content() {
            Content::Bomb if triggered_mine == Some(cell.coords()) => Sprite::TriggeredBomb,
            Content::Bomb => Sprite::Bomb,
            Content::Empty => Sprite::Open(0),
            Content::Count(count) => Sprite::Open(count),
        }
    }

    pub fn draw<C: Canvas + ?Sized>(engine: &Engine, canvas: &mut C) {
        Self::draw_filtered(engine, canvas, |_| true);
    }

    /// Draws only the cells `policy` accepts.
    pub fn draw_filtered<C, P>(engine: &Engine, canvas: &mut C, policy: P)
    where
        C: Canvas + ?Sized,
        P: Fn(&Cell) -> bool,
    {
        let triggered_mine = engine.triggered_mine();
        for cell in engine.cells().iter().filter(|&cell| policy(cell)) {
            canvas.draw(
                cell.rect(),
                cell.coords(),
                Self::sprite_for(cell, triggered_mine),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn engine(mines: &[Coord2]) -> Engine {
        let layout = MineLayout::from_mine_coords((3, 3), mines).unwrap();
        Engine::new(layout, Layout::default()).unwrap()
    }

    fn sprites(engine: &Engine) -> Vec<(Coord2, Sprite)> {
        let mut drawn = Vec::new();
        Renderer::draw(engine, &mut |_: Rect, coords: Coord2, sprite: Sprite| {
            drawn.push((coords, sprite))
        });
        drawn
    }

    fn sprite_at(engine: &Engine, coords: Coord2) -> Sprite {
        Renderer::sprite_for(engine.cell_at(coords).unwrap(), engine.triggered_mine())
    }

    #[test]
    fn draws_every_cell_once() {
        let engine = engine(&[(2, 2)]);

        let drawn = sprites(&engine);

        assert_eq!(drawn.len(), 9);
        assert!(drawn.iter().all(|&(_, sprite)| sprite == Sprite::Covered));
    }

    #[test]
    fn maps_cell_state_to_sprites() {
        let mut engine = engine(&[(2, 2), (0, 2)]);
        engine.reveal((1, 1)).unwrap();
        engine.reveal((2, 0)).unwrap();
        engine.toggle_flag((1, 2)).unwrap();

        assert_eq!(sprite_at(&engine, (1, 1)), Sprite::Open(2));
        assert_eq!(sprite_at(&engine, (2, 0)), Sprite::Open(0));
        assert_eq!(sprite_at(&engine, (0, 1)), Sprite::Open(1));
        assert_eq!(sprite_at(&engine, (1, 2)), Sprite::Flagged);
        assert_eq!(sprite_at(&engine, (2, 2)), Sprite::Covered);
    }

    #[test]
    fn loss_shows_triggered_bomb_and_wrong_flags() {
        let mut engine = engine(&[(2, 2), (0, 2)]);
        engine.toggle_flag((0, 0)).unwrap();
        engine.reveal((2, 2)).unwrap();

        assert_eq!(sprite_at(&engine, (2, 2)), Sprite::TriggeredBomb);
        assert_eq!(sprite_at(&engine, (0, 2)), Sprite::Bomb);
        assert_eq!(sprite_at(&engine, (0, 0)), Sprite::Misflagged);
    }

    #[test]
    fn policy_filters_cells() {
        let mut engine = engine(&[(2, 2)]);
        engine.reveal((0, 0)).unwrap();

        let mut count = 0;
        Renderer::draw_filtered(
            &engine,
            &mut |_: Rect, _: Coord2, _: Sprite| count += 1,
            Cell::is_covered,
        );

        assert_eq!(count, 1);
    }
}
