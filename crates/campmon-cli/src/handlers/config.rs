//! Config command handler.
//!
//! Shows the stored configuration and manages the OAuth tokens.

use std::fmt::Write as _;

use anyhow::Result;
use chrono::{TimeDelta, Utc};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::commands::{ConfigCommand, TokenCommand};
use crate::error::CliError;
use crate::presentation::{format_optional, name_and_id, redact, yes_no};

/// Execute the config command.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    let output = match command {
        ConfigCommand::Show => render_show(ctx).await?,
        ConfigCommand::Token { command } => match command {
            TokenCommand::Set {
                access,
                refresh,
                expires_in,
            } => set_token(ctx, &access, refresh, expires_in).await?,
            TokenCommand::Clear => clear_token(ctx).await?,
        },
    };
    println!("{output}");
    Ok(())
}

/// Render the stored configuration with tokens redacted.
pub async fn render_show(ctx: &CliContext) -> Result<String, CliError> {
    let Some(config) = ctx.configuration().load().await? else {
        return Ok(match ctx.configuration().config_id().await? {
            Some(id) => format!("Configuration {id} has no access token (not connected)"),
            None => "No configuration stored".to_string(),
        });
    };

    let fields = if config.sync_fields.is_empty() {
        "(recommended)".to_string()
    } else {
        config.sync_fields.join(", ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "Configuration:         {}", format_optional(config.id, "(unsaved)"));
    let _ = writeln!(out, "Access token:          {}", redact(Some(config.access_token.as_str())));
    let _ = writeln!(out, "Refresh token:         {}", redact(config.refresh_token.as_deref()));
    let _ = writeln!(
        out,
        "Token valid to:        {}",
        format_optional(config.token_valid_to, "(no expiry)")
    );
    let _ = writeln!(
        out,
        "Client:                {}",
        name_and_id(config.client_name.as_deref(), config.client_id.as_deref(), "(none)")
    );
    let _ = writeln!(
        out,
        "List:                  {}",
        name_and_id(config.list_name.as_deref(), config.list_id.as_deref(), "(none)")
    );
    let view_id = config.sync_view_id.map(|id| id.to_string());
    let _ = writeln!(
        out,
        "Sync view:             {}",
        name_and_id(config.sync_view_name.as_deref(), view_id.as_deref(), "(none)")
    );
    let _ = writeln!(out, "Subscriber email:      {}", config.subscriber_email.attribute_name());
    let _ = writeln!(out, "Sync duplicate emails: {}", yes_no(config.sync_duplicate_emails));
    let _ = writeln!(out, "Synchronized fields:   {fields}");
    let _ = writeln!(out, "Bulk sync in progress: {}", yes_no(config.bulk_sync_in_progress));
    let _ = write!(
        out,
        "Setup error:           {}",
        format_optional(config.setup_error.as_deref(), "(none)")
    );
    Ok(out)
}

/// Store OAuth tokens, creating the configuration row when missing.
pub async fn set_token(
    ctx: &CliContext,
    access: &str,
    refresh: Option<String>,
    expires_in: Option<i64>,
) -> Result<String, CliError> {
    let access = access.trim();
    if access.is_empty() {
        return Err(CliError::Arguments("access token must not be empty".to_string()));
    }
    if let Some(secs) = expires_in
        && secs <= 0
    {
        return Err(CliError::Arguments(format!(
            "--expires-in must be positive, got {secs}"
        )));
    }

    let expires_on = match expires_in {
        Some(secs) => Some(
            TimeDelta::try_seconds(secs)
                .and_then(|d| Utc::now().checked_add_signed(d))
                .ok_or_else(|| {
                    CliError::Arguments(format!("--expires-in out of range: {secs}"))
                })?,
        ),
        None => None,
    };
    let refresh = refresh
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    let existing = ctx.configuration().config_id().await?;
    let id = ctx
        .configuration()
        .save_token(existing, Some(access.to_string()), refresh, expires_on)
        .await?;
    info!(%id, "Stored marketing-API tokens");
    Ok(format!("Tokens stored in configuration {id}"))
}

/// Remove stored OAuth tokens.
pub async fn clear_token(ctx: &CliContext) -> Result<String, CliError> {
    let Some(id) = ctx.configuration().config_id().await? else {
        return Ok("No configuration stored, nothing to clear".to_string());
    };
    ctx.configuration().clear_token(Some(id)).await?;
    info!(%id, "Cleared marketing-API tokens");
    Ok(format!("Tokens cleared from configuration {id}"))
}
