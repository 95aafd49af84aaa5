//! Operation request and response DTOs.
//!
//! Field names serialize in `PascalCase` because the configuration UI reads
//! them verbatim.

use serde::{Deserialize, Serialize};

use super::marketing::{MailingList, MarketingClient};
use super::metadata::{SyncField, SyncView};

/// Snapshot of the integration configuration plus live CRM and marketing data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationData {
    pub configuration_exists: bool,
    pub error: Option<String>,
    pub id: Option<String>,
    pub clients: Vec<MarketingClient>,
    pub lists: Vec<MailingList>,
    pub bulk_sync_in_progress: bool,
    pub sync_duplicate_emails: bool,
    /// Option value of the subscriber e-mail selector.
    pub subscriber_email: i32,
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub list_id: Option<String>,
    pub list_name: Option<String>,
    pub fields: Vec<SyncField>,
    pub views: Vec<SyncView>,
}

/// Selections submitted by the configuration UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SaveConfigurationRequest {
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub list_id: Option<String>,
    pub list_name: Option<String>,
    pub sync_duplicate_emails: bool,
    pub subscriber_email: Option<i32>,
    pub sync_fields: Vec<String>,
    pub sync_view_id: Option<String>,
    pub sync_view_name: Option<String>,
}

/// Generic outcome of a state-changing operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl OperationOutcome {
    /// Successful outcome.
    pub const fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Failed outcome carrying a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}
