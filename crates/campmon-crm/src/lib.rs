#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultCrmClient is used through the core port traits, not its generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCrmClient;

// Configuration
pub use config::CrmClientConfig;

// Errors surfaced by client construction
pub use error::CrmError;

