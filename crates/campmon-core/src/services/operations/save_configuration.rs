//! Persist the selections made in the setup UI.

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use super::{Operation, OperationContext, to_json};
use crate::domain::{
    CampaignMonitorConfiguration, OperationOutcome, SaveConfigurationRequest, SubscriberEmail,
};
use crate::ports::CoreError;

pub struct SaveConfigurationOperation;

impl SaveConfigurationOperation {
    /// Apply the request to the stored configuration and save it.
    pub async fn apply(&self, ctx: &OperationContext, payload: &str) -> Result<Uuid, CoreError> {
        let request: SaveConfigurationRequest = serde_json::from_str(payload)
            .map_err(|e| CoreError::Validation(format!("invalid request payload: {e}")))?;

        let Some(mut config) = ctx.configuration.load().await? else {
            return Err(CoreError::Configuration(
                "the integration is not configured".to_string(),
            ));
        };

        apply_request(&mut config, request)?;
        let id = ctx.configuration.save(&config).await?;
        info!(%id, "Configuration selections saved");
        Ok(id)
    }
}

#[async_trait]
impl Operation for SaveConfigurationOperation {
    fn name(&self) -> &'static str {
        "saveconfiguration"
    }

    async fn execute(&self, ctx: &OperationContext, payload: &str) -> String {
        let outcome = match self.apply(ctx, payload).await {
            Ok(_) => OperationOutcome::ok(),
            Err(e) => {
                error!(error = %e, "Failed to save configuration");
                OperationOutcome::failed(format!("Unable to save configuration. {e}"))
            }
        };
        to_json(&outcome)
    }
}

fn apply_request(
    config: &mut CampaignMonitorConfiguration,
    request: SaveConfigurationRequest,
) -> Result<(), CoreError> {
    let subscriber_email = match request.subscriber_email {
        None => SubscriberEmail::default(),
        Some(value) => SubscriberEmail::from_option_value(value).ok_or_else(|| {
            CoreError::Validation(format!("unknown subscriber email option {value}"))
        })?,
    };

    let sync_view_id = match request.sync_view_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => Some(
            Uuid::parse_str(text)
                .map_err(|e| CoreError::Validation(format!("invalid view id '{text}': {e}")))?,
        )
        .filter(|id| !id.is_nil()),
    };

    config.client_id = request.client_id;
    config.client_name = request.client_name;
    config.list_id = request.list_id;
    config.list_name = request.list_name;
    config.sync_duplicate_emails = request.sync_duplicate_emails;
    config.subscriber_email = subscriber_email;
    config.sync_fields = request
        .sync_fields
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    config.sync_view_id = sync_view_id;
    config.sync_view_name = request.sync_view_name;
    Ok(())
}
