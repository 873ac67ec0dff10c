//! tty2048 - CLI
//!
//! Terminal 2048 with animated tile movement. Push tiles with hjkl or the
//! arrow keys; the high score survives between sessions.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, ensure};
use clap::Parser;
use tty2048::{
    engine::{Game, GameConfig},
    interactive::{App, run_tui},
    output::print_session_summary,
    storage,
};

#[derive(Parser)]
#[command(
    name = "tty2048",
    about = "Terminal 2048: push, merge, reach the winning tile",
    version
)]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Winning tile as a power of two (11 = 2048)
    #[arg(long, default_value_t = 11)]
    win_power: u8,

    /// Seconds per animation step; 0 disables animation
    #[arg(short = 'A', long = "animrate", default_value_t = 0.009)]
    animrate: f64,

    /// Seed for the spawn RNG, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// High-score file (defaults to $2048TTY_FILE or ~/.2048tty)
    #[arg(long)]
    score_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(
        cli.width >= 2 && cli.height >= 2,
        "the board needs at least 2 cells per side"
    );
    ensure!(cli.win_power >= 1, "the winning power must be at least 1");
    ensure!(
        cli.animrate >= 0.0 && cli.animrate.is_finite(),
        "the animation rate must be a non-negative number of seconds"
    );

    let score_path = cli.score_file.unwrap_or_else(storage::default_path);
    let initial_high = storage::load(&score_path);

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        win_power: cli.win_power,
    };
    let game = Game::new(&config, initial_high, cli.seed);
    let app = App::new(game, Duration::from_secs_f64(cli.animrate));

    let app = run_tui(app)?;

    let score = app.game.score();
    if let Err(err) = storage::save(&score_path, score.high()) {
        eprintln!("warning: could not save high score to {}: {err}", score_path.display());
    }
    print_session_summary(score, app.game.status(), initial_high);

    Ok(())
}
