//! Game session façade

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::moves::{Direction, Turn, apply_move};
use super::score::ScoreBoard;
use super::spawn::spawn_tile;
use super::state::{GameStatus, classify};
use crate::core::{Coord, Grid, Tile};

/// Board dimensions and the winning threshold.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// A tile of this power wins the game (11 = 2048).
    pub win_power: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            win_power: 11,
        }
    }
}

/// One interactive session: the board, the score and the spawn RNG.
///
/// The engine is synchronous and single-threaded; a turn either fully
/// resolves through [`Game::push`] or nothing happened. Debug mutation via
/// [`Game::inject`] bypasses scoring, spawning and classification entirely.
pub struct Game {
    grid: Grid,
    score: ScoreBoard,
    win_power: u8,
    rng: StdRng,
}

impl Game {
    /// Start a session with two freshly spawned tiles.
    ///
    /// `initial_high` seeds the high score from persisted storage. Passing a
    /// `seed` makes every spawn of the session reproducible.
    #[must_use]
    pub fn new(config: &GameConfig, initial_high: u64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut game = Self {
            grid: Grid::new(config.width, config.height),
            score: ScoreBoard::new(initial_high),
            win_power: config.win_power,
            rng,
        };

        spawn_tile(&mut game.grid, &mut game.rng);
        spawn_tile(&mut game.grid, &mut game.rng);
        game
    }

    /// Resolve one directional push: slide, merge, score, spawn.
    pub fn push(&mut self, direction: Direction) -> Turn {
        apply_move(&mut self.grid, direction, &mut self.score, &mut self.rng)
    }

    /// Current win/lose/ongoing state of the board.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        classify(&self.grid, self.win_power)
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> &ScoreBoard {
        &self.score
    }

    #[inline]
    #[must_use]
    pub const fn win_power(&self) -> u8 {
        self.win_power
    }

    /// Debug override: place a tile directly on the board.
    ///
    /// Goes straight to the grid: no scoring, no spawn, no classification.
    pub fn inject(&mut self, at: Coord, power: u8) {
        self.grid.set(at, Some(Tile::new(power)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_with_two_tiles() {
        let game = Game::new(&GameConfig::default(), 0, Some(1));

        assert_eq!(game.grid().tile_count(), 2);
        assert_eq!(game.score().total(), 0);
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = Game::new(&GameConfig::default(), 0, Some(99));
        let b = Game::new(&GameConfig::default(), 0, Some(99));

        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn high_score_is_seeded_from_persistence() {
        let game = Game::new(&GameConfig::default(), 1234, Some(1));

        assert_eq!(game.score().high(), 1234);
    }

    #[test]
    fn inject_bypasses_scoring_and_spawning() {
        let mut game = Game::new(&GameConfig::default(), 0, Some(1));
        let before = game.grid().tile_count();
        let target = game.grid().empty_cells()[0];

        game.inject(target, 7);

        assert_eq!(game.grid().get(target), Some(Tile::new(7)));
        assert_eq!(game.grid().tile_count(), before + 1, "no extra spawn");
        assert_eq!(game.score().total(), 0);
        assert_eq!(game.score().last_delta(), 0);
    }

    #[test]
    fn injected_winning_tile_classifies_as_won() {
        let mut game = Game::new(&GameConfig::default(), 0, Some(1));
        let target = game.grid().empty_cells()[0];

        game.inject(target, 11);

        assert_eq!(game.status(), GameStatus::Won);
    }
}
