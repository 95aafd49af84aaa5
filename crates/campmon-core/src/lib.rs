#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AttributeMetadata, CampaignMonitorConfiguration, ConfigurationData, ConfigurationPatch,
    ConfigurationRow, MailingList, MarketingAuth, MarketingClient, OAuthTokens, OperationOutcome,
    SaveConfigurationRequest, SavedView, SavedViewFilter, SubscriberEmail, SyncField, SyncView,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    ConfigurationRepository, CoreError, CrmMetadataPort, CrmPortError, CrmPortResult,
    MarketingClientPort, MarketingPortError, MarketingPortResult, RepositoryError,
};
pub use services::{
    Authenticator, ConfigurationService, Operation, OperationContext, OperationRegistry,
};

// Integration tests use the SQLite adapter; unit tests don't
#[cfg(test)]
use campmon_db as _;
