//! # External Services
//!
//! Clients for everything outside the process.
//!
//! - **[`api`]**: HTTP client for the public price feed

pub mod api;
