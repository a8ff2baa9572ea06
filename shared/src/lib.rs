//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the swapdesk application
//! and the public price feed, plus small utilities shared by every layer.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::market`]**: Price feed tickers
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::token_display_name`]**: Human-readable token names
//!   - **[`utils::icon_url`]**: Deterministic token icon addressing
//!
//! ## Wire Format
//!
//! DTOs serialize with default `serde` behavior: snake_case field names,
//! RFC 3339 timestamps via `chrono`. The price feed is a flat JSON array:
//!
//! ```text
//! [
//!   { "currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93 },
//!   { "currency": "BTC", "date": "2023-08-29T07:10:52.000Z", "price": 26002.82 }
//! ]
//! ```
//!
//! The same currency may appear more than once; consumers keep the last
//! entry seen.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
