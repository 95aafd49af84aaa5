//! Marketing-API client port trait.

use async_trait::async_trait;

use super::error::MarketingPortResult;
use crate::domain::{MailingList, MarketingAuth, MarketingClient, OAuthTokens};

/// Port trait for marketing-API operations.
///
/// # Design
///
/// - Uses core-owned DTOs, not wire types
/// - Credentials are passed per call; the client holds no session
/// - Returns `MarketingPortError` for all failures
#[async_trait]
pub trait MarketingClientPort: Send + Sync {
    /// List the client accounts visible to these credentials.
    async fn clients(&self, auth: &MarketingAuth) -> MarketingPortResult<Vec<MarketingClient>>;

    /// List the mailing lists of one client.
    async fn lists(
        &self,
        auth: &MarketingAuth,
        client_id: &str,
    ) -> MarketingPortResult<Vec<MailingList>>;

    /// Exchange a refresh token for a new token pair.
    async fn refresh_token(&self, refresh_token: &str) -> MarketingPortResult<OAuthTokens>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn MarketingClientPort>) {}
}
