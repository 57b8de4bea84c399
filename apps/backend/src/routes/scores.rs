use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use crate::domain::leaderboard::ScoreEntry;
use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::state::app_state::AppState;

/// Submit payload: `{ "name": string, "score": number }`.
///
/// A non-numeric `score` or missing field fails deserialization inside
/// [`ValidatedJson`] and surfaces as the API's 400 shape before this
/// handler runs.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
struct LeaderboardResponse {
    leaderboard: Vec<ScoreEntry>,
}

#[derive(Debug, Serialize)]
struct SubmitScoreResponse {
    ok: bool,
    leaderboard: Vec<ScoreEntry>,
}

async fn get_leaderboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let leaderboard = state.leaderboard.read().snapshot();
    Ok(HttpResponse::Ok().json(LeaderboardResponse { leaderboard }))
}

async fn submit_score(
    state: web::Data<AppState>,
    body: ValidatedJson<SubmitScoreRequest>,
) -> Result<HttpResponse, AppError> {
    let SubmitScoreRequest { name, score } = body.into_inner();
    let now_ms = unix_ms(OffsetDateTime::now_utc());

    let leaderboard = state
        .leaderboard
        .write()
        .submit(&name, score.round() as i64, now_ms)?;

    info!(score = score, entries = leaderboard.len(), "score submitted");

    Ok(HttpResponse::Ok().json(SubmitScoreResponse {
        ok: true,
        leaderboard,
    }))
}

fn unix_ms(t: OffsetDateTime) -> i64 {
    (t.unix_timestamp_nanos() / 1_000_000) as i64
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/leaderboard", web::get().to(get_leaderboard))
        .route("/score", web::post().to(submit_score));
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn unix_ms_matches_known_instant() {
        let t = datetime!(2024-01-01 00:00:00 UTC);
        assert_eq!(unix_ms(t), 1_704_067_200_000);
    }
}
