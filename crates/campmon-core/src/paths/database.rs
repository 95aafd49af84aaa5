//! Database path resolution.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// File name of the `SQLite` configuration store.
pub const DATABASE_FILE_NAME: &str = "campmon.db";

/// Get the path to the campmon database file inside the data root.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DATABASE_FILE_NAME))
}
