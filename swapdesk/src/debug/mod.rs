//! # Debugging and Logging
//!
//! File-based structured logging for the application.
//!
//! ## Modules
//!
//! - **[`config`]**: Logging configuration from environment variables
//! - **[`logger`]**: tracing subscriber initialization
//!
//! ## Environment Variables
//!
//! - `RUST_LOG` - log level filter (default `swapdesk=info,warn`)
//! - `SWAPDESK_LOG_DIR` - log directory (default `logs/`)

pub mod config;
pub mod logger;

pub use logger::init;
