//! Generation client error types.

use std::time::Duration;

use thiserror::Error;

/// Errors from the external text-generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never completed
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The request exceeded the configured deadline
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// The service answered, but without usable text
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// Classifies a transport error, separating deadline hits from the rest.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Network(err)
        }
    }
}
