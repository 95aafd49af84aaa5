//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use campmon_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (stdin, database file).
    #[error("IO error: {0}")]
    Io(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration store error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// CRM or Campaign Monitor failure.
    #[error("Remote service error: {0}")]
    Remote(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Codes follow sysexits.h where one fits. Errors that are not a
    /// `CliError` exit with 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Remote(_) => 69, // EX_UNAVAILABLE
            Self::Storage(_) => 73, // EX_CANTCREAT (closest fit)
            Self::Io(_) => 74,      // EX_IOERR
            Self::Config(_) => 78,  // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Storage(repo_err.to_string()),
            CoreError::Crm(crm_err) => Self::Remote(crm_err.to_string()),
            CoreError::Marketing(marketing_err) => Self::Remote(marketing_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::Configuration(msg) => Self::Config(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
