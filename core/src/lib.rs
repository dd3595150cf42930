//! Game-state engine for Minesweeper on a rectangular grid.
//!
//! A [`Session`] owns the running [`Engine`] and turns clicks into reveals and flags. Frontends
//! read [`Cell`]s back out, or let [`Renderer`] walk the board for them.

#![no_std]

extern crate alloc;

pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use geometry::*;
pub use grid::*;
pub use mines::*;
pub use render::*;
pub use session::*;
pub use types::*;

mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod geometry;
mod grid;
mod mines;
mod render;
mod session;
mod types;
