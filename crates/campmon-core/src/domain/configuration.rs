//! Configuration record domain types.
//!
//! The integration keeps exactly one configuration row. Adapters exchange
//! [`ConfigurationRow`] (the raw stored columns) and [`ConfigurationPatch`]
//! (a partial write) with the core; the core maps rows into the typed
//! [`CampaignMonitorConfiguration`] used by services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name given to a configuration row when it is first created.
pub const CONFIGURATION_ROW_NAME: &str = "Configuration";

/// Which contact e-mail attribute feeds the subscriber address.
///
/// Stored as an integer option value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriberEmail {
    /// `emailaddress1` (primary e-mail).
    #[default]
    EmailAddress1,
    /// `emailaddress2`.
    EmailAddress2,
    /// `emailaddress3`.
    EmailAddress3,
}

impl SubscriberEmail {
    /// Integer option value persisted in the configuration row.
    pub const fn option_value(self) -> i32 {
        match self {
            Self::EmailAddress1 => 1,
            Self::EmailAddress2 => 2,
            Self::EmailAddress3 => 3,
        }
    }

    /// Map a persisted option value back to the selector.
    pub const fn from_option_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::EmailAddress1),
            2 => Some(Self::EmailAddress2),
            3 => Some(Self::EmailAddress3),
            _ => None,
        }
    }

    /// Logical name of the contact attribute this selector refers to.
    pub const fn attribute_name(self) -> &'static str {
        match self {
            Self::EmailAddress1 => "emailaddress1",
            Self::EmailAddress2 => "emailaddress2",
            Self::EmailAddress3 => "emailaddress3",
        }
    }
}

/// Raw configuration row as stored by the CRM (or the local store).
///
/// Every column is nullable; mapping rules live in `ConfigurationService`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_on: Option<DateTime<Utc>>,
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub list_id: Option<String>,
    pub list_name: Option<String>,
    pub setup_error: Option<String>,
    pub sync_duplicate_emails: Option<bool>,
    /// Comma-separated logical names.
    pub sync_fields: Option<String>,
    /// View id as text; parsed by the service.
    pub sync_view_id: Option<String>,
    pub sync_view_name: Option<String>,
    /// Option value of [`SubscriberEmail`].
    pub subscriber_email: Option<i32>,
    pub bulk_sync_in_progress: Option<bool>,
    pub bulk_sync_data: Option<String>,
}

/// Partial write of the configuration row.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this column
/// - `Some(None)` = set column to null
/// - `Some(Some(value))` = set column to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationPatch {
    pub name: Option<Option<String>>,
    pub access_token: Option<Option<String>>,
    pub refresh_token: Option<Option<String>>,
    pub expires_on: Option<Option<DateTime<Utc>>>,
    pub client_id: Option<Option<String>>,
    pub client_name: Option<Option<String>>,
    pub list_id: Option<Option<String>>,
    pub list_name: Option<Option<String>>,
    pub setup_error: Option<Option<String>>,
    pub sync_duplicate_emails: Option<Option<bool>>,
    pub sync_fields: Option<Option<String>>,
    pub sync_view_id: Option<Option<String>>,
    pub sync_view_name: Option<Option<String>>,
    pub subscriber_email: Option<Option<i32>>,
    pub bulk_sync_in_progress: Option<Option<bool>>,
    pub bulk_sync_data: Option<Option<String>>,
}

impl ConfigurationPatch {
    /// Patch touching only the OAuth token columns.
    pub fn tokens(
        access_token: Option<String>,
        refresh_token: Option<String>,
        expires_on: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
            expires_on: Some(expires_on),
            ..Default::default()
        }
    }

    /// Returns `true` if the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply this patch to a stored row, only updating fields that are `Some`.
    pub fn apply_to(&self, row: &mut ConfigurationRow) {
        fn set<T: Clone>(target: &mut Option<T>, value: Option<&Option<T>>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        set(&mut row.name, self.name.as_ref());
        set(&mut row.access_token, self.access_token.as_ref());
        set(&mut row.refresh_token, self.refresh_token.as_ref());
        set(&mut row.expires_on, self.expires_on.as_ref());
        set(&mut row.client_id, self.client_id.as_ref());
        set(&mut row.client_name, self.client_name.as_ref());
        set(&mut row.list_id, self.list_id.as_ref());
        set(&mut row.list_name, self.list_name.as_ref());
        set(&mut row.setup_error, self.setup_error.as_ref());
        set(
            &mut row.sync_duplicate_emails,
            self.sync_duplicate_emails.as_ref(),
        );
        set(&mut row.sync_fields, self.sync_fields.as_ref());
        set(&mut row.sync_view_id, self.sync_view_id.as_ref());
        set(&mut row.sync_view_name, self.sync_view_name.as_ref());
        set(&mut row.subscriber_email, self.subscriber_email.as_ref());
        set(
            &mut row.bulk_sync_in_progress,
            self.bulk_sync_in_progress.as_ref(),
        );
        set(&mut row.bulk_sync_data, self.bulk_sync_data.as_ref());
    }
}

/// Typed, validated view of the configuration row.
///
/// Only produced for rows with a non-blank access token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignMonitorConfiguration {
    /// Row id; `None` for a configuration that has never been saved.
    pub id: Option<Uuid>,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_valid_to: Option<DateTime<Utc>>,
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub list_id: Option<String>,
    pub list_name: Option<String>,
    pub setup_error: Option<String>,
    pub sync_duplicate_emails: bool,
    /// Logical names explicitly selected for synchronization.
    pub sync_fields: Vec<String>,
    pub sync_view_id: Option<Uuid>,
    pub sync_view_name: Option<String>,
    pub subscriber_email: SubscriberEmail,
    pub bulk_sync_in_progress: bool,
    pub bulk_sync_data: Option<String>,
}

impl CampaignMonitorConfiguration {
    /// Configured client id, ignoring blank values.
    pub fn configured_client_id(&self) -> Option<&str> {
        self.client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
