//! The grid engine
//!
//! Everything that resolves a turn: the directional push/merge algorithm,
//! spawning, scoring and win/loss classification. The engine does no I/O
//! and produces a replayable event log per turn; the presentation layer
//! consumes that log at its own pace.

pub mod events;
pub mod game;
pub mod lane;
pub mod moves;
pub mod score;
pub mod spawn;
pub mod state;

pub use events::MoveEvent;
pub use game::{Game, GameConfig};
pub use lane::{Lane, LaneOutcome, resolve_lane};
pub use moves::{Direction, Turn, apply_move};
pub use score::ScoreBoard;
pub use spawn::spawn_tile;
pub use state::{GameStatus, classify};
