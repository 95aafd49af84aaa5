//! Public configuration for the Dynamics Web API client.

use std::time::Duration;

/// Default Web API version segment.
pub const DEFAULT_API_VERSION: &str = "v9.2";

/// Configuration for the Dynamics Web API client.
///
/// # Example
///
/// ```
/// use campmon_crm::CrmClientConfig;
/// use std::time::Duration;
///
/// let config = CrmClientConfig::new("https://contoso.crm.dynamics.com")
///     .with_timeout(Duration::from_secs(60))
///     .with_token("eyJ0eXAi...");
/// ```
#[derive(Debug, Clone)]
pub struct CrmClientConfig {
    /// Organization URL, e.g. `https://contoso.crm.dynamics.com`
    pub(crate) org_url: String,
    /// Web API version segment
    pub(crate) api_version: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Bearer token for the organization
    pub(crate) token: Option<String>,
}

impl CrmClientConfig {
    /// Create a configuration for an organization with default settings.
    #[must_use]
    pub fn new(org_url: impl Into<String>) -> Self {
        Self {
            org_url: org_url.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: concat!("campmon-crm/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }

    /// Set the Web API version segment.
    ///
    /// Defaults to `v9.2`.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
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

    /// Set the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional bearer token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CrmClientConfig::new("https://contoso.crm.dynamics.com");
        assert_eq!(config.org_url, "https://contoso.crm.dynamics.com");
        assert_eq!(config.api_version, "v9.2");
        assert!(config.user_agent.starts_with("campmon-crm/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CrmClientConfig::new("https://org.example")
            .with_api_version("v9.1")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_token("secret");

        assert_eq!(config.api_version, "v9.1");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.token.as_deref(), Some("secret"));

        let cleared = config.with_optional_token(None);
        assert!(cleared.token.is_none());
    }
}
