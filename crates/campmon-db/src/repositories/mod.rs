//! Repository implementations using `SQLite`.
//!
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod sqlite_configuration_repository;

pub use sqlite_configuration_repository::SqliteConfigurationRepository;
