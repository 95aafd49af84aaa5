//! `MarketingClientPort` implementation for `CreatesendClient`.

use async_trait::async_trait;
use campmon_core::domain::{MailingList, MarketingAuth, MarketingClient, OAuthTokens};
use campmon_core::ports::{MarketingClientPort, MarketingPortError, MarketingPortResult};
use chrono::{TimeDelta, Utc};

use crate::client::CreatesendClient;
use crate::error::CreatesendError;
use crate::http::HttpBackend;
use crate::models::{ClientSummary, ListSummary, TokenResponse};

// ============================================================================
// Error Mapping
// ============================================================================

/// Campaign Monitor code for an unknown client id.
const INVALID_CLIENT_ID: i64 = 102;

/// Convert internal `CreatesendError` to `MarketingPortError`.
///
/// `client_id` is the client a lists request targeted, if any.
fn map_error(err: CreatesendError, client_id: Option<&str>) -> MarketingPortError {
    match err {
        CreatesendError::Api {
            status: 401 | 403,
            message,
            ..
        } => MarketingPortError::Unauthorized { message },
        CreatesendError::Api { status: 429, .. } => MarketingPortError::RateLimited,
        CreatesendError::Api {
            status,
            code,
            message,
        } => match (code, client_id) {
            (Some(INVALID_CLIENT_ID), Some(client_id)) => MarketingPortError::ClientNotFound {
                client_id: client_id.to_string(),
            },
            (_, Some(client_id)) if status == 404 => MarketingPortError::ClientNotFound {
                client_id: client_id.to_string(),
            },
            (Some(code), _) => MarketingPortError::Api { code, message },
            (None, _) => MarketingPortError::Api {
                code: i64::from(status),
                message,
            },
        },
        CreatesendError::Network(e) => MarketingPortError::Network {
            message: e.to_string(),
        },
        CreatesendError::ClientBuild(message) => MarketingPortError::Network { message },
        CreatesendError::InvalidResponse { message } => {
            MarketingPortError::InvalidResponse { message }
        }
        CreatesendError::InvalidUrl(e) => MarketingPortError::InvalidResponse {
            message: format!("invalid request URL: {e}"),
        },
        CreatesendError::JsonParse(e) => MarketingPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_client(summary: ClientSummary) -> MarketingClient {
    MarketingClient {
        client_id: summary.client_id,
        name: summary.name,
    }
}

fn to_list(summary: ListSummary) -> MailingList {
    MailingList {
        list_id: summary.list_id,
        name: summary.name,
    }
}

fn to_tokens(response: TokenResponse) -> MarketingPortResult<OAuthTokens> {
    if response.access_token.trim().is_empty() {
        return Err(MarketingPortError::InvalidResponse {
            message: "token response without access_token".to_string(),
        });
    }
    let expires_on = match response.expires_in {
        Some(secs) => Some(
            TimeDelta::try_seconds(secs)
                .and_then(|d| Utc::now().checked_add_signed(d))
                .ok_or_else(|| MarketingPortError::InvalidResponse {
                    message: format!("expires_in out of range: {secs}"),
                })?,
        ),
        None => None,
    };
    Ok(OAuthTokens {
        access_token: response.access_token,
        refresh_token: response.refresh_token.filter(|t| !t.trim().is_empty()),
        expires_on,
    })
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> MarketingClientPort for CreatesendClient<B> {
    async fn clients(&self, auth: &MarketingAuth) -> MarketingPortResult<Vec<MarketingClient>> {
        let clients = self
            .list_clients(auth)
            .await
            .map_err(|e| map_error(e, None))?;
        Ok(clients.into_iter().map(to_client).collect())
    }

    async fn lists(
        &self,
        auth: &MarketingAuth,
        client_id: &str,
    ) -> MarketingPortResult<Vec<MailingList>> {
        let lists = self
            .list_lists(auth, client_id)
            .await
            .map_err(|e| map_error(e, Some(client_id)))?;
        Ok(lists.into_iter().map(to_list).collect())
    }

    async fn refresh_token(&self, refresh_token: &str) -> MarketingPortResult<OAuthTokens> {
        let response = self
            .exchange_refresh_token(refresh_token)
            .await
            .map_err(|e| map_error(e, None))?;
        to_tokens(response)
    }
}
