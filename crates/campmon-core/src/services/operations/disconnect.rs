//! Forget the stored marketing-API tokens.

use async_trait::async_trait;
use tracing::{error, info};

use super::{Operation, OperationContext, to_json};
use crate::domain::OperationOutcome;
use crate::ports::CoreError;

/// Clears the OAuth tokens of the configuration row, keeping its settings.
pub struct DisconnectOperation;

impl DisconnectOperation {
    async fn disconnect(ctx: &OperationContext) -> Result<(), CoreError> {
        match ctx.configuration.config_id().await? {
            Some(id) => {
                ctx.configuration.clear_token(Some(id)).await?;
                info!(%id, "Marketing-API tokens cleared");
            }
            None => info!("No configuration record, nothing to disconnect"),
        }
        Ok(())
    }
}

#[async_trait]
impl Operation for DisconnectOperation {
    fn name(&self) -> &'static str {
        "disconnect"
    }

    async fn execute(&self, ctx: &OperationContext, _payload: &str) -> String {
        let outcome = match Self::disconnect(ctx).await {
            Ok(()) => OperationOutcome::ok(),
            Err(e) => {
                error!(error = %e, "Failed to disconnect");
                OperationOutcome::failed(format!("Unable to disconnect. {e}"))
            }
        };
        to_json(&outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigurationRow;
    use crate::services::ConfigurationService;
    use crate::services::testing::{
        FakeCrm, FakeMarketing, InMemoryConfigurationRepo, configured_row,
    };
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    fn context(repo: &Arc<InMemoryConfigurationRepo>) -> OperationContext {
        OperationContext::new(
            Arc::new(ConfigurationService::new(repo.clone())),
            Arc::new(FakeCrm::default()),
            Arc::new(FakeMarketing::default()),
        )
    }

    #[tokio::test]
    async fn test_clears_tokens_and_keeps_settings() {
        let row = ConfigurationRow {
            client_id: Some("c1".to_string()),
            ..configured_row()
        };
        let repo = Arc::new(InMemoryConfigurationRepo::with_row(row));

        let response = DisconnectOperation.execute(&context(&repo), "").await;

        assert_eq!(response, r#"{"Success":true,"Error":null}"#);
        let row = repo.snapshot().unwrap();
        assert_eq!(row.access_token, None);
        assert_eq!(row.refresh_token, None);
        assert_eq!(row.client_id.as_deref(), Some("c1"));
    }

    #[tokio::test]
    async fn test_without_row_succeeds_without_writing() {
        let repo = Arc::new(InMemoryConfigurationRepo::default());

        let response = DisconnectOperation.execute(&context(&repo), "").await;

        assert_eq!(response, r#"{"Success":true,"Error":null}"#);
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
        assert!(repo.snapshot().is_none());
    }
}
