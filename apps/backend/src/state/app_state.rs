use parking_lot::RwLock;

use crate::domain::leaderboard::LeaderboardStore;

/// Application state containing shared resources.
///
/// Handlers receive this through `web::Data<AppState>`; the score store
/// lives behind a lock because actix runs handlers on multiple workers.
/// Each submit runs validate → append → sort → truncate under the write
/// lock, so submits never interleave.
#[derive(Debug, Default)]
pub struct AppState {
    pub leaderboard: RwLock<LeaderboardStore>,
}

impl AppState {
    /// Create a new AppState with an empty leaderboard.
    pub fn new() -> Self {
        Self {
            leaderboard: RwLock::new(LeaderboardStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_with_empty_board() {
        let state = AppState::new();
        assert!(state.leaderboard.read().is_empty());
    }
}
