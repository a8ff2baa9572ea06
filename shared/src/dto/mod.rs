//! # Data Transfer Objects (DTOs)
//!
//! Data structures describing what external services return to the
//! application.
//!
//! ## Module Organization
//!
//! - [`market`] - Price feed tickers
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Timestamps**: RFC 3339 strings, parsed into `chrono::DateTime<Utc>`
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod market;

pub use market::*;
