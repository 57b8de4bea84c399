use thiserror::Error;

/// Client-side failure taxonomy.
///
/// Everything here is non-fatal: failures surface as a notice banner and
/// the user re-triggers any retry by repeating the action.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure talking to the backend.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Api { status: u16, message: String },
}
