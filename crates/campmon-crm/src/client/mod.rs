//! Dynamics Web API client.

mod configuration;
mod metadata;

use crate::config::CrmClientConfig;
use crate::error::CrmResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::CrmConfig;
use crate::url::api_root;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default CRM client using the reqwest HTTP backend.
pub type DefaultCrmClient = CrmClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for one Dynamics organization.
///
/// Generic over the HTTP backend for testing. Use `DefaultCrmClient` in
/// production code.
pub struct CrmClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: CrmConfig,
}

impl DefaultCrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &CrmClientConfig) -> CrmResult<Self> {
        let internal = CrmConfig {
            api_root: api_root(&config.org_url, &config.api_version)?,
        };
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            config: internal,
        })
    }
}

impl<B: HttpBackend> CrmClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: CrmConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
