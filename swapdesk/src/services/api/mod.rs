//! # Price Feed API Client Module
//!
//! HTTP client for the public price feed.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and PriceSource implementation
//! └── prices.rs   - Price feed endpoint
//! ```

pub mod client;
pub mod prices;

pub use client::ApiClient;
