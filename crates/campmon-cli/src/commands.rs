//! Subcommand definitions.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run an operation and print its JSON response
    Op {
        /// Operation name, e.g. `loadmetadata`
        #[arg(required_unless_present = "list")]
        name: Option<String>,
        /// JSON payload (read from stdin when omitted and stdin is piped)
        #[arg(short, long)]
        payload: Option<String>,
        /// List the registered operations instead of running one
        #[arg(long, conflicts_with_all = ["name", "payload"])]
        list: bool,
    },

    /// Inspect or change the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the stored configuration with tokens redacted
    Show,
    /// Manage the stored Campaign Monitor OAuth tokens
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
}

/// Token command variants.
#[derive(Subcommand)]
pub enum TokenCommand {
    /// Store an access token and optional refresh token
    Set {
        /// OAuth access token
        #[arg(long)]
        access: String,
        /// OAuth refresh token
        #[arg(long)]
        refresh: Option<String>,
        /// Seconds until the access token expires
        #[arg(long)]
        expires_in: Option<i64>,
    },
    /// Remove the stored tokens
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_op_with_payload() {
        let cli = Cli::parse_from(["campmon", "op", "saveconfiguration", "-p", "{}"]);
        match cli.command {
            Some(Commands::Op {
                name,
                payload,
                list,
            }) => {
                assert_eq!(name.as_deref(), Some("saveconfiguration"));
                assert_eq!(payload.as_deref(), Some("{}"));
                assert!(!list);
            }
            _ => panic!("expected op command"),
        }
    }

    #[test]
    fn test_op_requires_name_or_list() {
        assert!(Cli::try_parse_from(["campmon", "op"]).is_err());
        assert!(Cli::try_parse_from(["campmon", "op", "--list"]).is_ok());
        assert!(Cli::try_parse_from(["campmon", "op", "--list", "disconnect"]).is_err());
    }

    #[test]
    fn test_token_set_arguments() {
        let cli = Cli::parse_from([
            "campmon",
            "config",
            "token",
            "set",
            "--access",
            "a",
            "--refresh",
            "r",
            "--expires-in",
            "3600",
        ]);
        match cli.command {
            Some(Commands::Config {
                command:
                    ConfigCommand::Token {
                        command:
                            TokenCommand::Set {
                                access,
                                refresh,
                                expires_in,
                            },
                    },
            }) => {
                assert_eq!(access, "a");
                assert_eq!(refresh.as_deref(), Some("r"));
                assert_eq!(expires_in, Some(3600));
            }
            _ => panic!("expected token set command"),
        }
    }
}
