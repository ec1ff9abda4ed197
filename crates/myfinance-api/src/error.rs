//! Error types for the finance API client.

use thiserror::Error;

/// Errors that can occur while talking to the finance API.
///
/// Non-200 responses are not errors; they come back as
/// [`crate::ApiOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout).
    #[error("request to finance API failed: {0}")]
    Transport(String),

    /// The backend answered 200 but the body did not match the contract.
    #[error("unexpected response from finance API: {0}")]
    Decode(String),
}

/// Result type for finance API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
