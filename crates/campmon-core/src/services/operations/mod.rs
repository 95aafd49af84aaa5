//! Named operations invoked by the configuration UI.
//!
//! Every operation accepts an opaque serialized payload and always returns a
//! JSON string. Failures are reported inside the response, never raised to
//! the caller.

mod disconnect;
mod load_metadata;
mod save_configuration;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use super::ConfigurationService;
use crate::domain::OperationOutcome;
use crate::ports::{CrmMetadataPort, MarketingClientPort};

pub use disconnect::DisconnectOperation;
pub use load_metadata::{LOAD_METADATA_ERROR_PREFIX, LoadMetadataOperation};
pub use save_configuration::SaveConfigurationOperation;

/// Request-scoped collaborators for one operation call.
///
/// The host builds one context per request; operations never reach for
/// global state.
#[derive(Clone)]
pub struct OperationContext {
    /// Correlates log lines of one request.
    pub request_id: Uuid,
    pub configuration: Arc<ConfigurationService>,
    pub crm: Arc<dyn CrmMetadataPort>,
    pub marketing: Arc<dyn MarketingClientPort>,
}

impl OperationContext {
    pub fn new(
        configuration: Arc<ConfigurationService>,
        crm: Arc<dyn CrmMetadataPort>,
        marketing: Arc<dyn MarketingClientPort>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            configuration,
            crm,
            marketing,
        }
    }
}

/// A named request handler with the always-returns-JSON contract.
#[async_trait]
pub trait Operation: Send + Sync {
    /// Lower-case name used for dispatch.
    fn name(&self) -> &'static str;

    /// Run the operation. Never fails; errors are encoded in the response.
    async fn execute(&self, ctx: &OperationContext, payload: &str) -> String;
}

/// Lookup table of operations by name.
pub struct OperationRegistry {
    operations: BTreeMap<&'static str, Arc<dyn Operation>>,
}

impl OperationRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            operations: BTreeMap::new(),
        }
    }

    /// Registry with every built-in operation.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LoadMetadataOperation));
        registry.register(Arc::new(SaveConfigurationOperation));
        registry.register(Arc::new(DisconnectOperation));
        registry
    }

    /// Add or replace an operation.
    pub fn register(&mut self, operation: Arc<dyn Operation>) {
        self.operations.insert(operation.name(), operation);
    }

    /// Registered operation names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.operations.keys().copied().collect()
    }

    /// Run the named operation.
    ///
    /// Names match case-insensitively. Unknown names produce an
    /// [`OperationOutcome`] error response.
    pub async fn dispatch(&self, ctx: &OperationContext, name: &str, payload: &str) -> String {
        let key = name.trim().to_ascii_lowercase();
        let Some(operation) = self.operations.get(key.as_str()) else {
            warn!(operation = name, "Unknown operation requested");
            return to_json(&OperationOutcome::failed(format!("Unknown operation: {name}")));
        };

        let span = info_span!("operation", name = operation.name(), request_id = %ctx.request_id);
        operation.execute(ctx, payload).instrument(span).await
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Serialize a response, falling back to a fixed error document.
pub(crate) fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize operation response");
        r#"{"Success":false,"Error":"Unable to serialize response."}"#.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{FakeCrm, FakeMarketing, InMemoryConfigurationRepo};

    fn context() -> OperationContext {
        OperationContext::new(
            Arc::new(ConfigurationService::new(Arc::new(
                InMemoryConfigurationRepo::default(),
            ))),
            Arc::new(FakeCrm::default()),
            Arc::new(FakeMarketing::default()),
        )
    }

    #[test]
    fn test_default_registry_names() {
        let registry = OperationRegistry::with_defaults();
        assert_eq!(
            registry.names(),
            vec!["disconnect", "loadmetadata", "saveconfiguration"]
        );
    }

    #[tokio::test]
    async fn test_unknown_operation_returns_error_document() {
        let registry = OperationRegistry::with_defaults();
        let response = registry.dispatch(&context(), "deleteEverything", "{}").await;

        let outcome: OperationOutcome = serde_json::from_str(&response).unwrap();
        assert!(!outcome.success);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Unknown operation: deleteEverything")
        );
    }

    #[tokio::test]
    async fn test_dispatch_is_case_insensitive() {
        let registry = OperationRegistry::with_defaults();
        let response = registry.dispatch(&context(), "LoadMetadata", "").await;

        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["ConfigurationExists"], false);
    }
}
