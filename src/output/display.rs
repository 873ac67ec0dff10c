//! Colored end-of-session summary

use colored::Colorize;

use crate::engine::{GameStatus, ScoreBoard};

/// Print the final score card once the alternate screen is gone.
///
/// `initial_high` is the persisted high score the session started with,
/// used to call out a new record.
pub fn print_session_summary(score: &ScoreBoard, status: GameStatus, initial_high: u64) {
    println!("\n{}", "─".repeat(40).cyan());

    match status {
        GameStatus::Won => println!("{}", "You reached the winning tile!".bright_green().bold()),
        GameStatus::Lost => println!("{}", "No moves left.".red().bold()),
        GameStatus::Ongoing => println!("Session ended."),
    }

    println!(
        "Score:      {}",
        score.total().to_string().bright_yellow().bold()
    );
    if score.high() > initial_high {
        println!(
            "High score: {} {}",
            score.high().to_string().bright_yellow().bold(),
            "(new record!)".bright_green()
        );
    } else {
        println!("High score: {}", score.high());
    }

    println!("{}", "─".repeat(40).cyan());
}
