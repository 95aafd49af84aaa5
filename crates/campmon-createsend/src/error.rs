//! Internal error types for Campaign Monitor operations.
//!
//! Mapped to `MarketingPortError` at the boundary in `port.rs`.

use thiserror::Error;

/// Result type alias for Campaign Monitor operations.
pub type CreatesendResult<T> = Result<T, CreatesendError>;

/// Errors related to Campaign Monitor API operations.
#[derive(Debug, Error)]
pub enum CreatesendError {
    /// The API answered with an error status and, usually, an error body.
    #[error("Campaign Monitor request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Campaign Monitor error code, when the body carried one
        code: Option<i64>,
        /// Error message or the requested URL
        message: String,
    },

    /// The API returned an unexpected payload.
    #[error("Invalid response from Campaign Monitor: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
