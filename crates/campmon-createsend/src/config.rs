//! Public configuration for the Campaign Monitor client.

use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.createsend.com/api/v3.2";

/// Default OAuth token endpoint.
pub const DEFAULT_OAUTH_TOKEN_URL: &str = "https://api.createsend.com/oauth/token";

/// Configuration for the Campaign Monitor client.
///
/// # Example
///
/// ```
/// use campmon_createsend::CreatesendClientConfig;
/// use std::time::Duration;
///
/// let config = CreatesendClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct CreatesendClientConfig {
    /// Base URL for the REST API
    pub(crate) base_url: String,
    /// OAuth token endpoint
    pub(crate) oauth_token_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for CreatesendClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            oauth_token_url: DEFAULT_OAUTH_TOKEN_URL.to_string(),
            user_agent: concat!("campmon-createsend/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CreatesendClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the REST API base URL.
    ///
    /// Defaults to `https://api.createsend.com/api/v3.2`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the OAuth token endpoint.
    #[must_use]
    pub fn with_oauth_token_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_token_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
