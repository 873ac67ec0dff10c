//! Win/loss classification

use crate::core::{Coord, Grid};

/// Where the session stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Won,
    Ongoing,
    Lost,
}

/// Classify the board, first match wins: a tile at the winning power is a
/// win even on a full board; any empty cell keeps the game going; a full
/// board survives only while an adjacent equal pair remains.
///
/// On a full board the only way a push can change anything is an adjacent
/// merge, so the pair scan is a complete stuck test there. It is not a
/// general "no move would change the grid" test and is never used on boards
/// with empty cells, which are `Ongoing` by definition.
#[must_use]
pub fn classify(grid: &Grid, win_power: u8) -> GameStatus {
    if grid.tiles().any(|(_, tile)| tile.power() == win_power) {
        return GameStatus::Won;
    }

    if grid.coords().any(|at| grid.get(at).is_none()) {
        return GameStatus::Ongoing;
    }

    for y in 0..grid.height() {
        for x in 0..grid.width() - 1 {
            if grid.get(Coord::new(x, y)) == grid.get(Coord::new(x + 1, y)) {
                return GameStatus::Ongoing;
            }
        }
    }
    for x in 0..grid.width() {
        for y in 0..grid.height() - 1 {
            if grid.get(Coord::new(x, y)) == grid.get(Coord::new(x, y + 1)) {
                return GameStatus::Ongoing;
            }
        }
    }

    GameStatus::Lost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    /// 4x4 checkerboard of alternating powers, no adjacent equal pair.
    fn full_stuck_grid() -> Grid {
        let mut grid = Grid::new(4, 4);
        for at in grid.coords().collect::<Vec<_>>() {
            let power = if (at.x + at.y) % 2 == 0 { 1 } else { 2 };
            grid.set(at, Some(Tile::new(power)));
        }
        grid
    }

    #[test]
    fn full_grid_without_pairs_is_lost() {
        assert_eq!(classify(&full_stuck_grid(), 11), GameStatus::Lost);
    }

    #[test]
    fn winning_tile_beats_lost_even_on_a_full_board() {
        let mut grid = full_stuck_grid();
        grid.set(Coord::new(3, 3), Some(Tile::new(11)));

        assert_eq!(classify(&grid, 11), GameStatus::Won);
    }

    #[test]
    fn any_empty_cell_keeps_the_game_ongoing() {
        let mut grid = full_stuck_grid();
        grid.set(Coord::new(2, 1), None);

        assert_eq!(classify(&grid, 11), GameStatus::Ongoing);
    }

    #[test]
    fn full_grid_with_row_pair_is_ongoing() {
        let mut grid = full_stuck_grid();
        // Make (0,0) and (1,0) equal.
        grid.set(Coord::new(1, 0), Some(Tile::new(1)));

        assert_eq!(classify(&grid, 11), GameStatus::Ongoing);
    }

    #[test]
    fn full_grid_with_column_pair_is_ongoing() {
        let mut grid = full_stuck_grid();
        // Make (0,0) and (0,1) equal.
        grid.set(Coord::new(0, 1), Some(Tile::new(1)));

        assert_eq!(classify(&grid, 11), GameStatus::Ongoing);
    }

    #[test]
    fn win_threshold_is_configurable() {
        let mut grid = Grid::new(4, 4);
        grid.set(Coord::new(0, 0), Some(Tile::new(5)));

        assert_eq!(classify(&grid, 5), GameStatus::Won);
        assert_eq!(classify(&grid, 11), GameStatus::Ongoing);
    }
}
