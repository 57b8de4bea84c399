use std::env;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Base URL for the backend API.
///
/// `REACTION_API_URL` overrides the default; a trailing slash is stripped
/// so path joins stay predictable.
pub fn api_base_url() -> String {
    match env::var("REACTION_API_URL") {
        Ok(raw) => normalize_base_url(&raw),
        Err(_) => DEFAULT_BASE_URL.to_string(),
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
