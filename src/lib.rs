//! Conway's Game of Life on a toroidal grid of packed cells.

pub mod engine;
pub mod pos;

pub use engine::{Cell, Grid, GridWindow, Transitions};
pub use pos::Pos2;
