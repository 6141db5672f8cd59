//! Error types for backend access.

use thiserror::Error;

/// Failure of a backend call.
///
/// Every failure mode of a retrieval lands here. Callers that do not care
/// which one occurred treat any variant as "the retrieval failed".
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Transport failed: connection refused, timeout, reset, or an
    /// undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Body was not the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder when it could not be read.
        message: String,
    },
}

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;
