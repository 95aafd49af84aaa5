//! Configuration service - reads and writes the single configuration row.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{
    CONFIGURATION_ROW_NAME, CampaignMonitorConfiguration, ConfigurationPatch, ConfigurationRow,
    SubscriberEmail,
};
use crate::ports::{ConfigurationRepository, CoreError, RepositoryError};

/// Service for configuration row operations.
///
/// A missing row, or a row without an access token, loads as `None`. Storage
/// failures propagate to the caller untouched.
pub struct ConfigurationService {
    repo: Arc<dyn ConfigurationRepository>,
}

impl ConfigurationService {
    /// Create a new configuration service.
    pub fn new(repo: Arc<dyn ConfigurationRepository>) -> Self {
        Self { repo }
    }

    /// Id of the configuration row, if one exists.
    pub async fn config_id(&self) -> Result<Option<Uuid>, CoreError> {
        Ok(self.repo.first_id().await?)
    }

    /// Load and validate the configuration.
    pub async fn load(&self) -> Result<Option<CampaignMonitorConfiguration>, CoreError> {
        let Some(row) = self.repo.load_first().await? else {
            debug!("No configuration record found");
            return Ok(None);
        };

        let config = map_row(row)?;
        if config.is_none() {
            debug!("Configuration record does not contain an access token");
        }
        Ok(config)
    }

    /// Save all mutable, non-token settings.
    ///
    /// Creates the row when the configuration has no id yet.
    pub async fn save(&self, config: &CampaignMonitorConfiguration) -> Result<Uuid, CoreError> {
        debug!("Saving configuration");
        let patch = settings_patch(config);
        self.write(config.id, patch).await
    }

    /// Save OAuth tokens only, leaving every other column untouched.
    pub async fn save_token(
        &self,
        id: Option<Uuid>,
        access_token: Option<String>,
        refresh_token: Option<String>,
        expires_on: Option<DateTime<Utc>>,
    ) -> Result<Uuid, CoreError> {
        let patch = ConfigurationPatch::tokens(access_token, refresh_token, expires_on);
        self.write(id, patch).await
    }

    /// Remove stored OAuth tokens.
    pub async fn clear_token(&self, id: Option<Uuid>) -> Result<Uuid, CoreError> {
        self.save_token(id, None, None, None).await
    }

    async fn write(&self, id: Option<Uuid>, mut patch: ConfigurationPatch) -> Result<Uuid, CoreError> {
        match id.filter(|id| !id.is_nil()) {
            Some(id) => {
                info!(%id, "Updating existing configuration record");
                self.repo.update(id, &patch).await?;
                Ok(id)
            }
            None => {
                info!("Creating new configuration record");
                patch.name = Some(Some(CONFIGURATION_ROW_NAME.to_string()));
                Ok(self.repo.create(&patch).await?)
            }
        }
    }
}

/// Map a stored row into a configuration.
///
/// Returns `Ok(None)` when the access token is empty or whitespace.
pub(crate) fn map_row(row: ConfigurationRow) -> Result<Option<CampaignMonitorConfiguration>, CoreError> {
    let Some(access_token) = row.access_token.filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };

    let subscriber_email = match row.subscriber_email {
        None => SubscriberEmail::default(),
        Some(value) => SubscriberEmail::from_option_value(value).unwrap_or_else(|| {
            warn!(value, "Unknown subscriber email option, using default");
            SubscriberEmail::default()
        }),
    };

    Ok(Some(CampaignMonitorConfiguration {
        id: Some(row.id),
        access_token,
        refresh_token: row.refresh_token,
        token_valid_to: row.expires_on,
        client_id: row.client_id,
        client_name: row.client_name,
        list_id: row.list_id,
        list_name: row.list_name,
        setup_error: row.setup_error,
        sync_duplicate_emails: row.sync_duplicate_emails.unwrap_or(false),
        sync_fields: split_sync_fields(row.sync_fields.as_deref()),
        sync_view_id: parse_view_id(row.sync_view_id.as_deref())?,
        sync_view_name: row.sync_view_name,
        subscriber_email,
        bulk_sync_in_progress: row.bulk_sync_in_progress.unwrap_or(false),
        bulk_sync_data: row.bulk_sync_data,
    }))
}

/// Split the stored comma-separated field list.
pub(crate) fn split_sync_fields(stored: Option<&str>) -> Vec<String> {
    stored
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a stored view id. Blank and nil ids mean "no view".
pub(crate) fn parse_view_id(stored: Option<&str>) -> Result<Option<Uuid>, RepositoryError> {
    let Some(text) = stored.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let id = Uuid::parse_str(text)
        .map_err(|e| RepositoryError::Serialization(format!("invalid sync view id '{text}': {e}")))?;
    Ok(Some(id).filter(|id| !id.is_nil()))
}

fn settings_patch(config: &CampaignMonitorConfiguration) -> ConfigurationPatch {
    let sync_fields = Some(config.sync_fields.join(",")).filter(|s| !s.is_empty());

    ConfigurationPatch {
        client_id: Some(config.client_id.clone()),
        client_name: Some(config.client_name.clone()),
        list_id: Some(config.list_id.clone()),
        list_name: Some(config.list_name.clone()),
        sync_duplicate_emails: Some(Some(config.sync_duplicate_emails)),
        sync_fields: Some(sync_fields),
        sync_view_id: Some(config.sync_view_id.map(|id| id.to_string())),
        sync_view_name: Some(config.sync_view_name.clone()),
        subscriber_email: Some(Some(config.subscriber_email.option_value())),
        bulk_sync_in_progress: Some(Some(config.bulk_sync_in_progress)),
        bulk_sync_data: Some(config.bulk_sync_data.clone()),
        ..Default::default()
    }
}
