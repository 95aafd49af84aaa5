//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::commands::Commands;

/// Where the configuration row is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Local `SQLite` database
    #[default]
    Sqlite,
    /// `campmon_configuration` entity of the CRM organization
    Crm,
}

/// Command-line interface for the CRM to Campaign Monitor integration.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "campmon")]
#[command(about = "Configure the CRM to Campaign Monitor integration")]
#[command(version)]
pub struct Cli {
    /// Configuration store to use
    #[arg(long, value_enum, env = "CAMPMON_STORE", default_value_t = StoreKind::Sqlite, global = true)]
    pub store: StoreKind,

    /// Path of the `SQLite` database (sqlite store only)
    #[arg(long, env = "CAMPMON_DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Organization URL of the CRM, e.g. `https://org.crm.dynamics.com`
    #[arg(long = "crm-url", env = "CAMPMON_CRM_URL", global = true)]
    pub crm_url: Option<String>,

    /// Bearer token for the CRM Web API
    #[arg(long = "crm-token", env = "CAMPMON_CRM_TOKEN", global = true, hide_env_values = true)]
    pub crm_token: Option<String>,

    /// Base URL of the Campaign Monitor API
    #[arg(long = "createsend-url", env = "CAMPMON_CREATESEND_URL", global = true)]
    pub createsend_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "campmon",
            "--store",
            "crm",
            "--crm-url",
            "https://org.example",
            "--verbose",
            "config",
            "show",
        ]);
        assert_eq!(cli.store, StoreKind::Crm);
        assert_eq!(cli.crm_url.as_deref(), Some("https://org.example"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["campmon", "op", "disconnect", "--database", "/tmp/c.db"]);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/c.db")));
    }

    #[test]
    fn test_rejects_unknown_store() {
        assert!(Cli::try_parse_from(["campmon", "--store", "xml", "config", "show"]).is_err());
    }
}
