//! # Core Abstractions
//!
//! Core traits, configuration and error types for dependency injection and
//! better testability.
//!
//! ## Modules
//!
//! - **[`config`]**: Timing configuration for the simulated flows
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`PriceSource`)
//!
//! ## Dependency Injection
//!
//! The price feed is consumed through the [`service::PriceSource`] trait so
//! tests can drive the form with a canned catalog instead of the network:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use swapdesk::core::service::PriceSource;
//!
//! // In production: the HTTP client
//! let source: Arc<dyn PriceSource> = Arc::new(swapdesk::services::api::ApiClient::new());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::SwapTimings;
pub use error::{AppError, Result};
pub use service::PriceSource;
