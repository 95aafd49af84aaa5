//! Op command handler.
//!
//! Runs a registered operation and prints its JSON response on stdout.

use std::io::{IsTerminal, Read};

use anyhow::Result;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the op command.
pub async fn execute(
    ctx: &CliContext,
    name: Option<&str>,
    payload: Option<String>,
    list: bool,
) -> Result<()> {
    if list {
        println!("{}", render_names(ctx));
        return Ok(());
    }
    let name = name.ok_or_else(|| CliError::Arguments("an operation name is required".to_string()))?;
    let payload = read_payload(payload)?;
    println!("{}", run(ctx, name, &payload).await?);
    Ok(())
}

/// Dispatch one operation and return its JSON response.
///
/// Operation failures are part of the response; only a missing CRM
/// connection is an error here.
pub async fn run(ctx: &CliContext, name: &str, payload: &str) -> Result<String, CliError> {
    let op_ctx = ctx.operation_context()?;
    debug!(request_id = %op_ctx.request_id, operation = name, "Running operation");
    Ok(ctx.registry().dispatch(&op_ctx, name, payload).await)
}

/// Registered operation names, one per line.
pub fn render_names(ctx: &CliContext) -> String {
    ctx.registry().names().join("\n")
}

/// The explicit payload, else stdin when it is piped, else empty.
fn read_payload(explicit: Option<String>) -> Result<String, CliError> {
    if let Some(payload) = explicit {
        return Ok(payload);
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut payload = String::new();
    stdin.lock().read_to_string(&mut payload)?;
    Ok(payload)
}
