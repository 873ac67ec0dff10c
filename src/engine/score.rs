//! Score accounting

/// Running total, per-turn delta and session high score.
///
/// Merge points are accumulated while the lanes of a turn resolve and folded
/// into the total exactly once per turn. `high` is seeded from the persisted
/// value at startup and never decreases.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    total: u64,
    high: u64,
    last_delta: u64,
    pending: u64,
}

impl ScoreBoard {
    #[must_use]
    pub fn new(initial_high: u64) -> Self {
        Self {
            high: initial_high,
            ..Self::default()
        }
    }

    /// Accumulate merge points discovered while resolving the current turn.
    pub fn add_delta(&mut self, points: u64) {
        self.pending += points;
    }

    /// Fold the turn's accumulated points into the total and raise the high
    /// score if the total passed it.
    pub fn commit_turn(&mut self) {
        self.last_delta = self.pending;
        self.total += self.pending;
        self.pending = 0;
        self.high = self.high.max(self.total);
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Points earned by the most recently committed turn.
    #[inline]
    #[must_use]
    pub const fn last_delta(&self) -> u64 {
        self.last_delta
    }
}
