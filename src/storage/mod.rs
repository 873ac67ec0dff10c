//! High-score persistence
//!
//! The only thing that survives a session is the high score, stored as a
//! plain integer in a small file. Reads that fail for any reason fall back
//! to zero; writes go through a temp file and a rename so a crash never
//! leaves a half-written score behind.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the score file location.
pub const SCORE_FILE_ENV: &str = "2048TTY_FILE";

/// The score file path: `$2048TTY_FILE` if set, else `~/.2048tty`.
#[must_use]
pub fn default_path() -> PathBuf {
    if let Some(path) = env::var_os(SCORE_FILE_ENV) {
        return PathBuf::from(path);
    }

    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".2048tty")
}

/// Read the persisted high score.
///
/// A missing file, unreadable file or malformed content all yield 0, a
/// fresh high score, never an error.
#[must_use]
pub fn load<P: AsRef<Path>>(path: P) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| content.trim().parse().ok())
        .unwrap_or(0)
}

/// Persist the high score, replacing the file atomically.
///
/// # Errors
/// Returns an I/O error if the temp file cannot be written or renamed into
/// place; callers report it and carry on, the session is never aborted.
pub fn save<P: AsRef<Path>>(path: P, high: u64) -> io::Result<()> {
    let path = path.as_ref();
    let tmp = path.with_extension("tmp");

    fs::write(&tmp, format!("{high}\n"))?;
    fs::rename(&tmp, path)
}
