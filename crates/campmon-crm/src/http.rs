//! HTTP backend abstraction for the Dynamics Web API.
//!
//! The production implementation uses reqwest with a bearer token. Requests
//! are sent once; there is no retry.

use crate::config::CrmClientConfig;
use crate::error::{CrmError, CrmResult};
use crate::models::ODataErrorBody;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends speaking OData JSON.
///
/// This is an implementation detail - external code uses the core port traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> CrmResult<T>;

    /// POST a JSON body, ignoring any response body.
    async fn post_json(&self, url: &Url, body: &serde_json::Value) -> CrmResult<()>;

    /// PATCH an existing record with a JSON body.
    ///
    /// Must not create the record when it is missing.
    async fn patch_json(&self, url: &Url, body: &serde_json::Value) -> CrmResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &CrmClientConfig) -> CrmResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CrmError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            auth_token: config.token.clone(),
        })
    }

    /// Attach the OData headers and optional authentication.
    fn prepare(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut request = request
            .header("Accept", "application/json")
            .header("OData-MaxVersion", "4.0")
            .header("OData-Version", "4.0");
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &Url) -> CrmResult<reqwest::Response> {
        let response = self.prepare(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(CrmError::ApiRequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
            message: odata_error_message(&body),
        })
    }
}

/// Extract the message of an OData error body.
pub(crate) fn odata_error_message(body: &str) -> Option<String> {
    let parsed: ODataErrorBody = serde_json::from_str(body).ok()?;
    Some(match parsed.error.code {
        Some(code) if !code.is_empty() => format!("{code}: {}", parsed.error.message),
        _ => parsed.error.message,
    })
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> CrmResult<T> {
        let response = self.send(self.client.get(url.as_str()), url).await?;
        let data: T = response.json().await?;
        Ok(data)
    }

    async fn post_json(&self, url: &Url, body: &serde_json::Value) -> CrmResult<()> {
        self.send(self.client.post(url.as_str()).json(body), url)
            .await?;
        Ok(())
    }

    async fn patch_json(&self, url: &Url, body: &serde_json::Value) -> CrmResult<()> {
        // If-Match: * turns an upsert into a plain update (404 when missing)
        self.send(
            self.client
                .patch(url.as_str())
                .header("If-Match", "*")
                .json(body),
            url,
        )
        .await?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_odata_error_message() {
        let body = r#"{"error":{"code":"0x80040217","message":"campmon_configuration With Id = 1 Does Not Exist"}}"#;
        assert_eq!(
            odata_error_message(body).as_deref(),
            Some("0x80040217: campmon_configuration With Id = 1 Does Not Exist")
        );
        assert_eq!(odata_error_message("<html>502</html>"), None);
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let config = CrmClientConfig::new("https://org.example").with_token("t");
        let backend = ReqwestBackend::new(&config).unwrap();
        assert_eq!(backend.auth_token.as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend = FakeBackend::new().with_response(
            "savedqueries",
            CannedResponse::ok(json!({"value": []})),
        );

        let url = Url::parse("https://org.example/api/data/v9.2/savedqueries").unwrap();
        let result: serde_json::Value = backend.get_json(&url).await.unwrap();
        assert_eq!(result["value"], json!([]));
    }

    #[tokio::test]
    async fn test_fake_backend_error_status() {
        let backend = FakeBackend::new().with_response(
            "EntityDefinitions",
            CannedResponse {
                status: 404,
                json: json!({"error": {"code": "0x80060888", "message": "Entity missing"}}),
            },
        );

        let url = Url::parse("https://org.example/api/data/v9.2/EntityDefinitions").unwrap();
        let result: CrmResult<serde_json::Value> = backend.get_json(&url).await;
        assert!(matches!(
            result,
            Err(CrmError::ApiRequestFailed { status: 404, message: Some(_), .. })
        ));
    }

    #[tokio::test]
    async fn test_fake_backend_records_writes() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://org.example/api/data/v9.2/campmon_configurations").unwrap();

        backend.post_json(&url, &json!({"campmon_name": "Configuration"})).await.unwrap();

        let writes = backend.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].method, "POST");
        assert_eq!(writes[0].body["campmon_name"], "Configuration");
    }
}
