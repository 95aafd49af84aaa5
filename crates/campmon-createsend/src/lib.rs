#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultCreatesendClient is used through MarketingClientPort, not its generic structure
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

pub use client::DefaultCreatesendClient;
pub use config::CreatesendClientConfig;
pub use error::CreatesendError;

