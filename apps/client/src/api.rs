//! HTTP access to the leaderboard service.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ClientError;

/// One leaderboard row as served by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    /// Reaction time in milliseconds (lower is better).
    pub score: i64,
    /// Submission time, unix milliseconds.
    pub ts: i64,
}

#[derive(Debug, Deserialize)]
struct LeaderboardResponse {
    leaderboard: Vec<ScoreEntry>,
}

#[derive(Debug, Serialize)]
struct SubmitScoreRequest<'a> {
    name: &'a str,
    score: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Client configured from `REACTION_API_URL` (same-host default).
    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    /// Fetch the current top-10, ascending by score.
    pub async fn fetch_leaderboard(&self) -> Result<Vec<ScoreEntry>, ClientError> {
        let url = format!("{}/api/leaderboard", self.base_url);
        let resp = Self::check(self.http.get(&url).send().await?).await?;
        let body: LeaderboardResponse = resp.json().await?;
        Ok(body.leaderboard)
    }

    /// Submit a reaction and return the refreshed top-10.
    pub async fn submit_score(
        &self,
        name: &str,
        score_ms: u64,
    ) -> Result<Vec<ScoreEntry>, ClientError> {
        let url = format!("{}/api/score", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&SubmitScoreRequest {
                name,
                score: score_ms,
            })
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        let body: LeaderboardResponse = resp.json().await?;
        Ok(body.leaderboard)
    }

    /// Turn a non-success response into [`ClientError::Api`], decoding the
    /// backend's `{ "error": string }` body when it has one.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let message = resp
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "unexpected server response".to_string());
        Err(ClientError::Api { status, message })
    }
}
