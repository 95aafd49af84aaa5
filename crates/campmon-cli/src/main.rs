//! CLI entry point.
//!
//! Parses arguments, installs logging, composes the context via bootstrap
//! and dispatches to handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use campmon_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Logs go to stderr; stdout is reserved for command output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(config).await?;

    match command {
        Commands::Op {
            name,
            payload,
            list,
        } => {
            handlers::op::execute(&ctx, name.as_deref(), payload, list).await?;
        }
        Commands::Config { command } => {
            handlers::config::execute(&ctx, command).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads CAMPMON_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
