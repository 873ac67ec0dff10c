//! Directional push/merge over a single row or column
//!
//! A [`Lane`] is the ordered list of cell coordinates of one row or column,
//! index 0 being the edge the push travels toward. The resolver always
//! compacts toward index 0 and knows nothing about rows, columns or
//! directions; [`Lane::travel_order`] encodes those by choosing the
//! coordinate order (reversed for right/down pushes).

use super::events::MoveEvent;
use super::moves::Direction;
use crate::core::{Coord, Grid, Tile};

/// An index mapping from lane position to grid coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    cells: Vec<Coord>,
}

impl Lane {
    #[must_use]
    pub fn new(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    /// All lanes of a `width` x `height` grid for a push in `direction`,
    /// ordered by row/column index, each with its cells in travel order.
    #[must_use]
    pub fn travel_order(width: usize, height: usize, direction: Direction) -> Vec<Self> {
        match direction {
            Direction::Left => (0..height)
                .map(|y| Self::new((0..width).map(|x| Coord::new(x, y)).collect()))
                .collect(),
            Direction::Right => (0..height)
                .map(|y| Self::new((0..width).rev().map(|x| Coord::new(x, y)).collect()))
                .collect(),
            Direction::Up => (0..width)
                .map(|x| Self::new((0..height).map(|y| Coord::new(x, y)).collect()))
                .collect(),
            Direction::Down => (0..width)
                .map(|x| Self::new((0..height).rev().map(|y| Coord::new(x, y)).collect()))
                .collect(),
        }
    }

    /// Grid coordinate of lane position `index`.
    #[inline]
    #[must_use]
    pub fn coord(&self, index: usize) -> Coord {
        self.cells[index]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// What resolving one lane produced.
#[derive(Debug, Clone)]
pub struct LaneOutcome {
    /// Whether the lane content differs from before the push.
    pub changed: bool,
    /// Slide and merge events in discovery order.
    pub events: Vec<MoveEvent>,
    /// Points earned from merges, `2^(power+1)` each.
    pub points: u64,
}

/// Push the lane's tiles toward index 0, merging equal neighbours.
///
/// Scans occupied cells in lane order and compacts them into a fresh
/// sequence. A tile merges with the previous compacted tile only when that
/// slot is not itself the product of a merge in this scan: each tile merges
/// at most once per move, so a run of equal tiles collapses pairwise from
/// the leading edge.
pub fn resolve_lane(grid: &mut Grid, lane: &Lane) -> LaneOutcome {
    let before: Vec<Option<Tile>> = (0..lane.len()).map(|i| grid.get(lane.coord(i))).collect();

    let mut compacted: Vec<Tile> = Vec::with_capacity(lane.len());
    let mut events = Vec::new();
    let mut points = 0;
    let mut last_merged = false;

    for (i, slot) in before.iter().enumerate() {
        let Some(tile) = *slot else { continue };

        if !last_merged && compacted.last().is_some_and(|&last| last == tile) {
            let merged = tile.merged();
            let target = compacted.len() - 1;
            events.push(MoveEvent::Merged {
                tile,
                from: lane.coord(i),
                to: lane.coord(target),
                merged,
            });
            compacted[target] = merged;
            points += u64::from(merged.value());
            last_merged = true;
        } else {
            events.push(MoveEvent::Moved {
                tile,
                from: lane.coord(i),
                to: lane.coord(compacted.len()),
            });
            compacted.push(tile);
            last_merged = false;
        }
    }

    let after: Vec<Option<Tile>> = (0..lane.len()).map(|i| compacted.get(i).copied()).collect();
    let changed = before != after;

    if changed {
        for (i, &slot) in after.iter().enumerate() {
            grid.set(lane.coord(i), slot);
        }
    }

    LaneOutcome {
        changed,
        events,
        points,
    }
}
