//! Internal API wire types for Campaign Monitor.

use serde::Deserialize;
use url::Url;

/// Internal configuration with parsed URLs.
#[derive(Debug, Clone)]
pub struct CreatesendConfig {
    /// REST API base, always with a trailing slash
    pub base_url: Url,
    pub oauth_token_url: Url,
}

/// Entry of `GET /clients.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSummary {
    #[serde(rename = "ClientID")]
    pub client_id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Entry of `GET /clients/{id}/lists.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSummary {
    #[serde(rename = "ListID")]
    pub list_id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Response of the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Error body: `{"Code": 120, "Message": "Invalid OAuth Token"}`.
///
/// The OAuth endpoint answers with `{"error": ..., "error_description": ...}`
/// instead; both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "Code", default)]
    pub code: Option<i64>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable message in the body.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error_description).or(self.error)
    }
}
