//! tty2048
//!
//! A terminal 2048: a library-shaped grid engine under a ratatui front end.
//! The engine is pure and synchronous: one directional push resolves to an
//! ordered event log that the presentation layer replays at its own pace.
//!
//! # Quick Start
//!
//! ```rust
//! use tty2048::core::{Coord, Grid, Tile};
//! use tty2048::engine::{Direction, Lane, resolve_lane};
//!
//! let mut grid = Grid::new(4, 4);
//! grid.set(Coord::new(0, 0), Some(Tile::new(1)));
//! grid.set(Coord::new(1, 0), Some(Tile::new(1)));
//!
//! // Push the top row toward the left edge: the two "2"s become one "4".
//! let lanes = Lane::travel_order(4, 4, Direction::Left);
//! let outcome = resolve_lane(&mut grid, &lanes[0]);
//!
//! assert!(outcome.changed);
//! assert_eq!(outcome.points, 4);
//! assert_eq!(grid.get(Coord::new(0, 0)), Some(Tile::new(2)));
//! ```

// Core domain types
pub mod core;

// The push/merge engine
pub mod engine;

// Interactive TUI interface
pub mod interactive;

// Post-session terminal output
pub mod output;

// High-score persistence
pub mod storage;
