//! Internal Web API wire types.
//!
//! These types are internal to `campmon-crm`. External consumers use the
//! DTOs defined in `campmon-core`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration: the resolved Web API root.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    /// `{org}/api/data/{version}/`, always with a trailing slash
    pub api_root: Url,
}

// ============================================================================
// OData envelopes
// ============================================================================

/// Collection response: `{"value": [...]}`.
#[derive(Debug, Deserialize)]
pub struct ODataCollection<T> {
    pub value: Vec<T>,
}

/// Error response: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ODataErrorBody {
    pub error: ODataError,
}

#[derive(Debug, Deserialize)]
pub struct ODataError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

// ============================================================================
// campmon_configuration
// ============================================================================

/// Entity set name of the configuration table.
pub const CONFIGURATION_ENTITY_SET: &str = "campmon_configurations";

/// Columns read from the configuration table.
pub const CONFIGURATION_COLUMNS: &[&str] = &[
    "campmon_configurationid",
    "campmon_name",
    "campmon_accesstoken",
    "campmon_refreshtoken",
    "campmon_expireson",
    "campmon_clientid",
    "campmon_clientname",
    "campmon_listid",
    "campmon_listname",
    "campmon_setuperror",
    "campmon_syncduplicateemails",
    "campmon_syncfields",
    "campmon_syncviewid",
    "campmon_syncviewname",
    "campmon_subscriberemail",
    "campmon_bulksyncinprogress",
    "campmon_bulksyncdata",
];

/// A `campmon_configuration` record as returned by the Web API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    #[serde(rename = "campmon_configurationid")]
    pub id: String,
    #[serde(rename = "campmon_name", default)]
    pub name: Option<String>,
    #[serde(rename = "campmon_accesstoken", default)]
    pub access_token: Option<String>,
    #[serde(rename = "campmon_refreshtoken", default)]
    pub refresh_token: Option<String>,
    #[serde(rename = "campmon_expireson", default)]
    pub expires_on: Option<DateTime<Utc>>,
    #[serde(rename = "campmon_clientid", default)]
    pub client_id: Option<String>,
    #[serde(rename = "campmon_clientname", default)]
    pub client_name: Option<String>,
    #[serde(rename = "campmon_listid", default)]
    pub list_id: Option<String>,
    #[serde(rename = "campmon_listname", default)]
    pub list_name: Option<String>,
    #[serde(rename = "campmon_setuperror", default)]
    pub setup_error: Option<String>,
    #[serde(rename = "campmon_syncduplicateemails", default)]
    pub sync_duplicate_emails: Option<bool>,
    #[serde(rename = "campmon_syncfields", default)]
    pub sync_fields: Option<String>,
    #[serde(rename = "campmon_syncviewid", default)]
    pub sync_view_id: Option<String>,
    #[serde(rename = "campmon_syncviewname", default)]
    pub sync_view_name: Option<String>,
    #[serde(rename = "campmon_subscriberemail", default)]
    pub subscriber_email: Option<i32>,
    #[serde(rename = "campmon_bulksyncinprogress", default)]
    pub bulk_sync_in_progress: Option<bool>,
    #[serde(rename = "campmon_bulksyncdata", default)]
    pub bulk_sync_data: Option<String>,
}

// ============================================================================
// Metadata
// ============================================================================

/// Attribute definition from `EntityDefinitions(...)/Attributes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    pub logical_name: String,
    #[serde(default)]
    pub display_name: Option<LocalizedLabel>,
    #[serde(default)]
    pub is_valid_for_advanced_find: Option<ManagedBool>,
}

/// `DisplayName` complex value; only the user's label is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalizedLabel {
    #[serde(default)]
    pub user_localized_label: Option<Label>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    pub label: String,
}

/// Boolean managed property: `{"Value": true, ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedBool {
    pub value: bool,
}

impl AttributeDefinition {
    /// The user's display label, if one is set.
    pub fn label(&self) -> Option<&str> {
        self.display_name
            .as_ref()?
            .user_localized_label
            .as_ref()
            .map(|l| l.label.as_str())
    }

    pub fn valid_for_advanced_find(&self) -> bool {
        self.is_valid_for_advanced_find
            .as_ref()
            .is_some_and(|v| v.value)
    }
}

/// A `savedquery` record.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedQueryRecord {
    pub savedqueryid: String,
    #[serde(default)]
    pub name: Option<String>,
}
