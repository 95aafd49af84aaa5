//! Configuration snapshot for the setup UI.

use async_trait::async_trait;
use tracing::{debug, error};

use super::{Operation, OperationContext, to_json};
use crate::domain::{
    CONTACT_ENTITY, CampaignMonitorConfiguration, ConfigurationData, MailingList, MarketingAuth,
    MarketingClient, SavedViewFilter, build_sync_fields, build_sync_views,
};
use crate::ports::{CoreError, MarketingClientPort};
use crate::services::Authenticator;

/// Prefix of the error text reported when the snapshot cannot be built.
pub const LOAD_METADATA_ERROR_PREFIX: &str = "Unable to retrieve configuration data.";

/// Builds the merged configuration snapshot: stored settings, marketing
/// clients and lists, and the CRM contact fields and views.
pub struct LoadMetadataOperation;

impl LoadMetadataOperation {
    /// Assemble the snapshot, propagating the first failure.
    pub async fn build(&self, ctx: &OperationContext) -> Result<ConfigurationData, CoreError> {
        let Some(config) = ctx.configuration.load().await? else {
            debug!("Integration not configured, returning empty snapshot");
            return Ok(ConfigurationData::default());
        };

        let auth = Authenticator::new(&ctx.configuration, ctx.marketing.as_ref())
            .resolve(&config)
            .await?;

        debug!("Retrieving marketing clients");
        let clients = ctx.marketing.clients(&auth).await?;
        let lists = fetch_lists(ctx.marketing.as_ref(), &auth, &clients, &config).await?;

        debug!("Retrieving contact views");
        let views = ctx.crm.saved_views(&SavedViewFilter::contact_views()).await?;

        debug!("Retrieving contact attributes");
        let attributes = ctx.crm.entity_attributes(CONTACT_ENTITY).await?;

        Ok(ConfigurationData {
            configuration_exists: true,
            error: None,
            id: config.id.map(|id| id.to_string()),
            clients,
            lists,
            bulk_sync_in_progress: config.bulk_sync_in_progress,
            sync_duplicate_emails: config.sync_duplicate_emails,
            subscriber_email: config.subscriber_email.option_value(),
            client_id: config.client_id.clone(),
            client_name: config.client_name.clone(),
            list_id: config.list_id.clone(),
            list_name: config.list_name.clone(),
            views: build_sync_views(views, &config),
            fields: build_sync_fields(attributes, &config),
        })
    }
}

#[async_trait]
impl Operation for LoadMetadataOperation {
    fn name(&self) -> &'static str {
        "loadmetadata"
    }

    async fn execute(&self, ctx: &OperationContext, _payload: &str) -> String {
        let data = match self.build(ctx).await {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, "Failed to build configuration snapshot");
                ConfigurationData {
                    error: Some(format!("{LOAD_METADATA_ERROR_PREFIX} {e}")),
                    ..Default::default()
                }
            }
        };
        to_json(&data)
    }
}

/// Lists shown for the client picker.
///
/// A single-client account shows that client's lists; otherwise the
/// configured client's lists, if one is configured.
async fn fetch_lists(
    marketing: &dyn MarketingClientPort,
    auth: &MarketingAuth,
    clients: &[MarketingClient],
    config: &CampaignMonitorConfiguration,
) -> Result<Vec<MailingList>, CoreError> {
    let client_id = match clients {
        [only] => Some(only.client_id.as_str()),
        _ => config.configured_client_id(),
    };

    match client_id {
        Some(client_id) => {
            debug!(client_id, "Retrieving mailing lists");
            Ok(marketing.lists(auth, client_id).await?)
        }
        None => Ok(Vec::new()),
    }
}
