//! Internal error types for Dynamics Web API operations.
//!
//! Mapped to core port errors at the boundary in `port.rs`.

use thiserror::Error;

/// Result type alias for CRM operations.
pub type CrmResult<T> = Result<T, CrmError>;

/// Errors related to Dynamics Web API operations.
#[derive(Debug, Error)]
pub enum CrmError {
    /// The Web API answered with an error status.
    #[error("CRM request failed with status {status}: {url}{}", detail(.message.as_deref()))]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Message from the OData error body, if any
        message: Option<String>,
    },

    /// The Web API returned an unexpected payload.
    #[error("Invalid response from CRM: {message}")]
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

fn detail(message: Option<&str>) -> String {
    message.map_or_else(String::new, |m| format!(" ({m})"))
}
