//! Core domain types for the board
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod coord;
mod grid;
mod tile;

pub use coord::Coord;
pub use grid::Grid;
pub use tile::Tile;
