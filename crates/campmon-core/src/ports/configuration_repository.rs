//! Configuration repository trait definition.
//!
//! This port defines the interface for persisting the single configuration
//! row. Implementations handle all storage details internally.

use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::{ConfigurationPatch, ConfigurationRow};

/// Repository for the integration configuration row.
///
/// # Design Rules
///
/// - No `sqlx` or HTTP types in signatures
/// - Works with raw [`ConfigurationRow`] columns; mapping is the service's job
/// - Absence of a row is `Ok(None)`, never an error
#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    /// Id of the first configuration row, if any.
    async fn first_id(&self) -> Result<Option<Uuid>, RepositoryError>;

    /// Load the first configuration row with all columns.
    async fn load_first(&self) -> Result<Option<ConfigurationRow>, RepositoryError>;

    /// Create a new row from a patch and return its id.
    async fn create(&self, patch: &ConfigurationPatch) -> Result<Uuid, RepositoryError>;

    /// Apply a patch to an existing row.
    ///
    /// Returns `RepositoryError::NotFound` if no row has this id.
    async fn update(&self, id: Uuid, patch: &ConfigurationPatch) -> Result<(), RepositoryError>;
}
