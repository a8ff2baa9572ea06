//! # Market Data DTOs
//!
//! Types describing the public price feed consumed by the catalog loader.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the public price feed.
///
/// The feed is a flat array of these records. A currency may appear more
/// than once; consumers deduplicate by `currency`, keeping the last entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTicker {
    /// Token symbol, e.g. "ETH"
    pub currency: String,
    /// Timestamp of the quote
    pub date: DateTime<Utc>,
    /// Unit price in USD
    pub price: f64,
}
