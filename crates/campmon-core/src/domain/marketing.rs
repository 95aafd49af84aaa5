//! Marketing-API domain types (clients, lists, credentials).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A marketing-API client account.
///
/// Agency accounts own several clients; direct accounts own exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingClient {
    #[serde(rename = "ClientID")]
    pub client_id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// A mailing list inside a client account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingList {
    #[serde(rename = "ListID")]
    pub list_id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Resolved credentials for marketing-API calls.
#[derive(Clone, PartialEq, Eq)]
pub enum MarketingAuth {
    /// OAuth bearer token.
    OAuth { access_token: String },
}

impl MarketingAuth {
    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        match self {
            Self::OAuth { access_token } => format!("Bearer {access_token}"),
        }
    }
}

impl std::fmt::Debug for MarketingAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OAuth { .. } => f
                .debug_struct("OAuth")
                .field("access_token", &"<redacted>")
                .finish(),
        }
    }
}

/// Tokens returned by an OAuth refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_on: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_debug_redacts_token() {
        let auth = MarketingAuth::OAuth {
            access_token: "secret-token".to_string(),
        };
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("secret-token"));
        assert_eq!(auth.authorization_header(), "Bearer secret-token");
    }

    #[test]
    fn test_client_serializes_wire_names() {
        let client = MarketingClient {
            client_id: "abc".to_string(),
            name: "Acme".to_string(),
        };
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["ClientID"], "abc");
        assert_eq!(json["Name"], "Acme");
    }
}
