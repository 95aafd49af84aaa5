//! Marketing-API client port definitions.
//!
//! The actual implementation lives in `campmon-createsend`.

mod client;
mod error;

pub use client::MarketingClientPort;
pub use error::{MarketingPortError, MarketingPortResult};
