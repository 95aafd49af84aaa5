//! Error types for marketing port operations.

use thiserror::Error;

/// Errors from marketing-API port operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum MarketingPortError {
    /// The access token was rejected or has expired.
    #[error("Authentication failed: {message}")]
    Unauthorized {
        /// Detail returned by the API
        message: String,
    },

    /// The requested client does not exist or is not visible.
    #[error("Client not found: {client_id}")]
    ClientNotFound {
        /// The client ID that was not found
        client_id: String,
    },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// The API returned an error code and message.
    #[error("API error {code}: {message}")]
    Api {
        /// Marketing-API error code
        code: i64,
        /// Message returned by the API
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

/// Result type alias for marketing port operations.
pub type MarketingPortResult<T> = Result<T, MarketingPortError>;
