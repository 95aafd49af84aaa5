//! Command handlers that delegate to the core services.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call core services or the operation registry
//!   3. Format output for the terminal
//!
//! Rendering is split from printing so it can be tested.

pub mod config;
pub mod op;
