//! Campaign Monitor client.

use campmon_core::domain::MarketingAuth;
use tracing::debug;
use url::Url;

use crate::config::CreatesendClientConfig;
use crate::error::CreatesendResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{ClientSummary, CreatesendConfig, ListSummary, TokenResponse};
use crate::url::{clients_url, lists_url, parse_base};

/// Default Campaign Monitor client using the reqwest HTTP backend.
pub type DefaultCreatesendClient = CreatesendClient<ReqwestBackend>;

/// Client for the Campaign Monitor REST API.
///
/// Generic over the HTTP backend for testing. Use `DefaultCreatesendClient`
/// in production code.
pub struct CreatesendClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: CreatesendConfig,
}

impl DefaultCreatesendClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &CreatesendClientConfig) -> CreatesendResult<Self> {
        let internal = CreatesendConfig {
            base_url: parse_base(&config.base_url)?,
            oauth_token_url: Url::parse(&config.oauth_token_url)?,
        };
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            config: internal,
        })
    }
}

impl<B: HttpBackend> CreatesendClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(config: CreatesendConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Clients visible to the credentials.
    pub async fn list_clients(&self, auth: &MarketingAuth) -> CreatesendResult<Vec<ClientSummary>> {
        let url = clients_url(&self.config)?;
        let clients: Vec<ClientSummary> = self.backend.get_json(&url, auth).await?;
        debug!(count = clients.len(), "Retrieved clients");
        Ok(clients)
    }

    /// Subscriber lists of a client.
    pub async fn list_lists(
        &self,
        auth: &MarketingAuth,
        client_id: &str,
    ) -> CreatesendResult<Vec<ListSummary>> {
        let url = lists_url(&self.config, client_id)?;
        let lists: Vec<ListSummary> = self.backend.get_json(&url, auth).await?;
        debug!(client_id, count = lists.len(), "Retrieved lists");
        Ok(lists)
    }

    /// Exchange a refresh token at the OAuth endpoint.
    pub async fn exchange_refresh_token(&self, refresh_token: &str) -> CreatesendResult<TokenResponse> {
        self.backend
            .post_form(
                &self.config.oauth_token_url,
                &[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", refresh_token),
                ],
            )
            .await
    }
}
