//! Composition utilities for `SQLite`-backed repositories.
//!
//! Construction only; no domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use campmon_core::ports::ConfigurationRepository;

use crate::repositories::SqliteConfigurationRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create the configuration repository as a port trait object.
    pub fn configuration_repository(pool: SqlitePool) -> Arc<dyn ConfigurationRepository> {
        Arc::new(SqliteConfigurationRepository::new(pool))
    }
}
