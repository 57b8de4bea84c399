#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use domain::leaderboard::{LeaderboardStore, ScoreEntry, LEADERBOARD_CAP, MAX_NAME_CHARS};
pub use error::{AppError, ErrorCode};
pub use extractors::validated_json::ValidatedJson;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use state::app_state::AppState;
