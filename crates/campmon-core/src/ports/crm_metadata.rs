//! CRM metadata port.
//!
//! Read-only access to entity attribute metadata and saved views. The
//! Dynamics Web API implementation lives in `campmon-crm`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AttributeMetadata, SavedView, SavedViewFilter};

/// Errors from CRM metadata operations.
#[derive(Debug, Error)]
pub enum CrmPortError {
    /// The entity does not exist in the organization.
    #[error("Entity not found: {entity}")]
    EntityNotFound {
        /// Logical name that was requested
        entity: String,
    },

    /// Authentication against the CRM failed.
    #[error("CRM authentication failed: {message}")]
    Unauthorized {
        /// Detail from the CRM
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The CRM answered with something we could not interpret.
    #[error("Invalid CRM response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

/// Result type alias for CRM metadata operations.
pub type CrmPortResult<T> = Result<T, CrmPortError>;

/// Port trait for CRM metadata queries.
#[async_trait]
pub trait CrmMetadataPort: Send + Sync {
    /// All attribute metadata for an entity.
    async fn entity_attributes(&self, entity: &str) -> CrmPortResult<Vec<AttributeMetadata>>;

    /// Saved (system) views matching the filter.
    async fn saved_views(&self, filter: &SavedViewFilter) -> CrmPortResult<Vec<SavedView>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn _assert_object_safe(_: Arc<dyn CrmMetadataPort>) {}

    #[test]
    fn test_error_display() {
        let err = CrmPortError::EntityNotFound {
            entity: "contact".to_string(),
        };
        assert!(err.to_string().contains("contact"));
    }
}
