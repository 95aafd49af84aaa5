//! Core services - the integration's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete adapters.

mod authenticator;
mod configuration_service;
mod operations;

#[cfg(test)]
mod testing;

pub use authenticator::{Authenticator, TOKEN_REFRESH_SKEW_SECS, needs_refresh};
pub use configuration_service::ConfigurationService;
pub use operations::{
    DisconnectOperation, LOAD_METADATA_ERROR_PREFIX, LoadMetadataOperation, Operation,
    OperationContext, OperationRegistry, SaveConfigurationOperation,
};
