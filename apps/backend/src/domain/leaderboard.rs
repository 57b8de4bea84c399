//! Leaderboard domain logic.
//!
//! The store is an explicitly owned object injected into request handlers
//! through application state; nothing here touches process-wide globals.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Maximum number of retained entries.
pub const LEADERBOARD_CAP: usize = 10;

/// Longest stored player name, in characters.
pub const MAX_NAME_CHARS: usize = 32;

/// One submitted score. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    /// Reaction time in milliseconds (lower is better).
    pub score: i64,
    /// Submission time, unix milliseconds.
    pub ts: i64,
}

/// Ranked list of the best (lowest) scores, ascending, capped at
/// [`LEADERBOARD_CAP`].
///
/// Retention is bounded: entries that fall off the end of the top-10 are
/// discarded on submit, so the store holds at most `LEADERBOARD_CAP + 1`
/// entries transiently and `LEADERBOARD_CAP` at rest.
#[derive(Debug, Default)]
pub struct LeaderboardStore {
    entries: Vec<ScoreEntry>,
}

impl LeaderboardStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(LEADERBOARD_CAP + 1),
        }
    }

    /// Validate and record a score, returning the resulting top-10.
    ///
    /// Names longer than [`MAX_NAME_CHARS`] are truncated at a character
    /// boundary. Sorting is stable, so equal scores rank by submission
    /// order.
    pub fn submit(
        &mut self,
        name: &str,
        score: i64,
        submitted_at_ms: i64,
    ) -> Result<Vec<ScoreEntry>, AppError> {
        if name.is_empty() {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "name and numeric score required",
            ));
        }

        let name: String = name.chars().take(MAX_NAME_CHARS).collect();
        self.entries.push(ScoreEntry {
            name,
            score,
            ts: submitted_at_ms,
        });
        self.entries.sort_by_key(|e| e.score);
        self.entries.truncate(LEADERBOARD_CAP);

        Ok(self.entries.clone())
    }

    /// Current top-10 snapshot. No side effects.
    pub fn snapshot(&self) -> Vec<ScoreEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
