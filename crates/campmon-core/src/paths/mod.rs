//! Path utilities for campmon data directories.
//!
//! - Database location
//! - Application data root
//!
//! Returns `PathBuf` and `PathError`; no terminal I/O happens here.

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, database_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
