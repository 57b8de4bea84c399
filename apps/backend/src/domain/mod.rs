pub mod leaderboard;

pub use leaderboard::{LeaderboardStore, ScoreEntry};
