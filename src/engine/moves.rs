//! Move orchestration
//!
//! One turn = one directional push: every lane is resolved in index order,
//! a tile spawns if anything changed, and the turn's points are committed to
//! the score board.

use rand::Rng;

use super::events::MoveEvent;
use super::lane::{Lane, resolve_lane};
use super::score::ScoreBoard;
use super::spawn::spawn_tile;
use crate::core::Grid;

/// A directional push command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The resolved result of one turn.
#[derive(Debug, Clone)]
pub struct Turn {
    /// Whether any lane changed; a spawn happened exactly when it did.
    pub moved: bool,
    /// Slide/merge events in lane order, the spawn event last.
    pub events: Vec<MoveEvent>,
}

/// Resolve a push in `direction` across the whole grid.
pub fn apply_move(
    grid: &mut Grid,
    direction: Direction,
    score: &mut ScoreBoard,
    rng: &mut impl Rng,
) -> Turn {
    let mut moved = false;
    let mut events = Vec::new();

    for lane in Lane::travel_order(grid.width(), grid.height(), direction) {
        let outcome = resolve_lane(grid, &lane);
        moved |= outcome.changed;
        score.add_delta(outcome.points);
        events.extend(outcome.events);
    }

    if moved {
        events.push(spawn_tile(grid, rng));
    }
    score.commit_turn();

    Turn { moved, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Tile};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn left_push_merges_scores_and_spawns() {
        // Row 0 holds [2, 2, _, _]; pushing left leaves a single 4 at the
        // edge, worth 4 points, plus one spawned tile somewhere empty.
        let mut grid = Grid::new(4, 4);
        grid.set(Coord::new(0, 0), Some(Tile::new(1)));
        grid.set(Coord::new(1, 0), Some(Tile::new(1)));
        let mut score = ScoreBoard::new(0);
        let mut rng = StdRng::seed_from_u64(42);

        let turn = apply_move(&mut grid, Direction::Left, &mut score, &mut rng);

        assert!(turn.moved);
        assert_eq!(grid.get(Coord::new(0, 0)), Some(Tile::new(2)));
        assert_eq!(score.total(), 4);
        assert_eq!(score.last_delta(), 4);

        let merges = turn
            .events
            .iter()
            .filter(|event| matches!(event, MoveEvent::Merged { .. }))
            .count();
        assert_eq!(merges, 1);
        assert!(
            matches!(turn.events.last(), Some(MoveEvent::Spawned { .. })),
            "the spawn event comes last"
        );
        // Merged pair became one tile, spawn added one: two tiles total.
        assert_eq!(grid.tile_count(), 2);
    }

    #[test]
    fn unchanged_push_spawns_nothing() {
        let mut grid = Grid::new(4, 4);
        grid.set(Coord::new(0, 0), Some(Tile::new(1)));
        grid.set(Coord::new(0, 1), Some(Tile::new(2)));
        let snapshot = grid.clone();
        let mut score = ScoreBoard::new(0);
        let mut rng = StdRng::seed_from_u64(42);

        let turn = apply_move(&mut grid, Direction::Left, &mut score, &mut rng);

        assert!(!turn.moved);
        assert_eq!(grid, snapshot);
        assert_eq!(score.total(), 0);
        assert!(
            !turn
                .events
                .iter()
                .any(|event| matches!(event, MoveEvent::Spawned { .. }))
        );
    }

    #[test]
    fn tile_count_never_grows_by_more_than_the_spawn() {
        let mut grid = Grid::new(4, 4);
        grid.set(Coord::new(0, 0), Some(Tile::new(1)));
        grid.set(Coord::new(1, 0), Some(Tile::new(1)));
        grid.set(Coord::new(2, 0), Some(Tile::new(1)));
        grid.set(Coord::new(3, 0), Some(Tile::new(1)));
        grid.set(Coord::new(0, 1), Some(Tile::new(3)));
        let before = grid.tile_count();
        let mut score = ScoreBoard::new(0);
        let mut rng = StdRng::seed_from_u64(1);

        let turn = apply_move(&mut grid, Direction::Left, &mut score, &mut rng);

        let merges = turn
            .events
            .iter()
            .filter(|event| matches!(event, MoveEvent::Merged { .. }))
            .count();
        assert_eq!(merges, 2);
        // Two merges remove two tiles, the spawn puts one back.
        assert_eq!(grid.tile_count(), before - merges + 1);
    }

    #[test]
    fn vertical_push_resolves_columns() {
        let mut grid = Grid::new(4, 4);
        grid.set(Coord::new(2, 1), Some(Tile::new(4)));
        grid.set(Coord::new(2, 3), Some(Tile::new(4)));
        let mut score = ScoreBoard::new(0);
        let mut rng = StdRng::seed_from_u64(9);

        let turn = apply_move(&mut grid, Direction::Up, &mut score, &mut rng);

        assert!(turn.moved);
        assert_eq!(grid.get(Coord::new(2, 0)), Some(Tile::new(5)));
        assert_eq!(score.last_delta(), 32);
    }
}
