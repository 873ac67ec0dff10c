//! Per-turn animation event log

use crate::core::{Coord, Tile};

/// One animation step produced while resolving a turn.
///
/// Events describe what the presentation layer should show, in the order the
/// resolver discovered them (spawns always last). They never feed back into
/// game state; replaying them in any order yields the same board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    /// A tile slides from `from` to `to` without merging. Zero-distance
    /// slides are emitted too and play back as no-ops.
    Moved { tile: Tile, from: Coord, to: Coord },
    /// A tile travels from `from` to `to`, where it is absorbed into
    /// `merged` together with the tile already there.
    Merged {
        tile: Tile,
        from: Coord,
        to: Coord,
        merged: Tile,
    },
    /// A new tile appears after a successful move.
    Spawned { tile: Tile, at: Coord },
}
