//! HTTP backend abstraction for the Campaign Monitor API.
//!
//! Requests are sent once; there is no retry.

use async_trait::async_trait;
use campmon_core::domain::MarketingAuth;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::CreatesendClientConfig;
use crate::error::{CreatesendError, CreatesendResult};
use crate::models::ApiErrorBody;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that talk to Campaign Monitor.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Authenticated GET returning a JSON body.
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        auth: &MarketingAuth,
    ) -> CreatesendResult<T>;

    /// Unauthenticated form POST returning a JSON body.
    async fn post_form<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        form: &[(&str, &str)],
    ) -> CreatesendResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &CreatesendClientConfig) -> CreatesendResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CreatesendError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &Url,
    ) -> CreatesendResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(api_error(status.as_u16(), url, &body))
    }
}

/// Build an API error from a failed response body.
pub(crate) fn api_error(status: u16, url: &Url, body: &str) -> CreatesendError {
    let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();
    let code = parsed.as_ref().and_then(|b| b.code);
    let message = parsed
        .and_then(ApiErrorBody::into_message)
        .unwrap_or_else(|| url.to_string());
    CreatesendError::Api {
        status,
        code,
        message,
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        auth: &MarketingAuth,
    ) -> CreatesendResult<T> {
        let response = self
            .client
            .get(url.as_str())
            .header("Authorization", auth.authorization_header())
            .header("Accept", "application/json")
            .send()
            .await?;
        Self::read_json(response, url).await
    }

    async fn post_form<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        form: &[(&str, &str)],
    ) -> CreatesendResult<T> {
        let response = self.client.post(url.as_str()).form(form).send().await?;
        Self::read_json(response, url).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub struct CannedResponse {
        pub status: u16,
        pub json: serde_json::Value,
    }

    impl CannedResponse {
        pub const fn ok(json: serde_json::Value) -> Self {
            Self { status: 200, json }
        }

        pub const fn error(status: u16, json: serde_json::Value) -> Self {
            Self { status, json }
        }
    }

    /// A recorded request: URL plus the authorization header or form body.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub url: String,
        pub authorization: Option<String>,
        pub form: Vec<(String, String)>,
    }

    /// A fake HTTP backend with canned responses matched in insertion order.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        pub requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(mut self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses.push((url_contains.to_string(), response));
            self
        }

        fn respond<T: DeserializeOwned>(
            &self,
            url: &Url,
            request: RecordedRequest,
        ) -> CreatesendResult<T> {
            self.requests.lock().unwrap().push(request);
            let response = self
                .responses
                .iter()
                .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                .map(|(_, r)| r.clone())
                .ok_or_else(|| api_error(404, url, ""))?;

            if !(200..300).contains(&response.status) {
                return Err(api_error(response.status, url, &response.json.to_string()));
            }
            serde_json::from_value(response.json).map_err(Into::into)
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            auth: &MarketingAuth,
        ) -> CreatesendResult<T> {
            self.respond(
                url,
                RecordedRequest {
                    url: url.to_string(),
                    authorization: Some(auth.authorization_header()),
                    form: Vec::new(),
                },
            )
        }

        async fn post_form<T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            form: &[(&str, &str)],
        ) -> CreatesendResult<T> {
            self.respond(
                url,
                RecordedRequest {
                    url: url.to_string(),
                    authorization: None,
                    form: form
                        .iter()
                        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                        .collect(),
                },
            )
        }
    }
}
