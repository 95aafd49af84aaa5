//! Marketing-API credential resolution.
//!
//! Turns the stored OAuth tokens into a [`MarketingAuth`], refreshing the
//! access token once when it is about to expire.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use super::ConfigurationService;
use crate::domain::{CampaignMonitorConfiguration, MarketingAuth};
use crate::ports::{CoreError, MarketingClientPort};

/// Tokens expiring within this window are refreshed before use.
pub const TOKEN_REFRESH_SKEW_SECS: i64 = 60;

/// Resolves marketing-API credentials from a loaded configuration.
pub struct Authenticator<'a> {
    configuration: &'a ConfigurationService,
    marketing: &'a dyn MarketingClientPort,
}

impl<'a> Authenticator<'a> {
    pub fn new(
        configuration: &'a ConfigurationService,
        marketing: &'a dyn MarketingClientPort,
    ) -> Self {
        Self {
            configuration,
            marketing,
        }
    }

    /// Resolve credentials using the current time.
    pub async fn resolve(
        &self,
        config: &CampaignMonitorConfiguration,
    ) -> Result<MarketingAuth, CoreError> {
        self.resolve_at(config, Utc::now()).await
    }

    /// Resolve credentials as of `now`.
    ///
    /// A refreshed token pair is persisted before it is returned.
    pub async fn resolve_at(
        &self,
        config: &CampaignMonitorConfiguration,
        now: DateTime<Utc>,
    ) -> Result<MarketingAuth, CoreError> {
        if config.access_token.trim().is_empty() {
            return Err(CoreError::Configuration(
                "no access token stored".to_string(),
            ));
        }

        let refresh_token = config
            .refresh_token
            .as_deref()
            .filter(|t| !t.trim().is_empty());

        match refresh_token {
            Some(refresh_token) if needs_refresh(config.token_valid_to, now) => {
                info!("Access token expired or expiring, refreshing");
                let tokens = self.marketing.refresh_token(refresh_token).await?;
                self.configuration
                    .save_token(
                        config.id,
                        Some(tokens.access_token.clone()),
                        tokens
                            .refresh_token
                            .or_else(|| Some(refresh_token.to_string())),
                        tokens.expires_on,
                    )
                    .await?;
                Ok(MarketingAuth::OAuth {
                    access_token: tokens.access_token,
                })
            }
            _ => {
                debug!("Using stored access token");
                Ok(MarketingAuth::OAuth {
                    access_token: config.access_token.clone(),
                })
            }
        }
    }
}

/// Whether a token with this expiry must be refreshed at `now`.
///
/// Unknown expiry is treated as still valid.
pub fn needs_refresh(valid_to: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    valid_to.is_some_and(|valid_to| valid_to <= now + Duration::seconds(TOKEN_REFRESH_SKEW_SECS))
}
