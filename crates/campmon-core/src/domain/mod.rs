//! Domain types for the CRM ↔ Campaign Monitor integration.
//!
//! Pure data and pure functions only: no I/O, no adapter types.

mod configuration;
mod marketing;
mod metadata;
mod snapshot;

pub use configuration::{
    CONFIGURATION_ROW_NAME, CampaignMonitorConfiguration, ConfigurationPatch, ConfigurationRow,
    SubscriberEmail,
};
pub use marketing::{MailingList, MarketingAuth, MarketingClient, OAuthTokens};
pub use metadata::{
    AttributeMetadata, CONTACT_ENTITY, QUERY_TYPE_PUBLIC_VIEW, RECOMMENDED_FIELDS, SavedView,
    SavedViewFilter, SyncField, SyncView, VIEW_STATE_ACTIVE, build_sync_fields, build_sync_views,
    is_field_checked,
};
pub use snapshot::{ConfigurationData, OperationOutcome, SaveConfigurationRequest};
