//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity.

use async_trait::async_trait;
use shared::dto::market::PriceTicker;

use crate::core::error::Result;

/// Source of token prices.
///
/// The catalog loader calls this exactly once per activation. The default
/// implementation is [`crate::services::api::ApiClient`], which fetches the
/// public price feed over HTTP; tests substitute a canned list.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current price tickers.
    ///
    /// The returned list may contain duplicate currencies; callers keep
    /// the last entry seen per currency.
    async fn fetch_prices(&self) -> Result<Vec<PriceTicker>>;
}
