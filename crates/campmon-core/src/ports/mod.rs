//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - Remote-API traits take credentials per call

pub mod configuration_repository;
pub mod crm_metadata;
pub mod marketing;

use thiserror::Error;

pub use configuration_repository::ConfigurationRepository;
pub use crm_metadata::{CrmMetadataPort, CrmPortError, CrmPortResult};
pub use marketing::{MarketingClientPort, MarketingPortError, MarketingPortResult};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// or HTTP errors) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, remote CRM, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., a second configuration row).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map this to their own error types (CLI exit codes, operation
/// error fields).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// CRM metadata query failed.
    #[error(transparent)]
    Crm(#[from] CrmPortError),

    /// Marketing-API call failed.
    #[error(transparent)]
    Marketing(#[from] MarketingPortError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The integration has not been configured yet.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
