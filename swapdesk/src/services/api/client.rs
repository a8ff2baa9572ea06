//! # API Client
//!
//! HTTP client for the public price feed.

use async_trait::async_trait;
use reqwest::Client;
use shared::dto::market::PriceTicker;

use crate::core::error::Result;
use crate::core::service::PriceSource;

/// URL of the public price feed
const PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

/// HTTP client for fetching token prices.
///
/// Maintains a connection pool; one instance is shared for the session.
pub struct ApiClient {
    pub(crate) client: Client,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent the
    /// catalog load from hanging the startup screen.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// URL of the price feed endpoint.
    pub(crate) fn prices_url() -> &'static str {
        PRICES_URL
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for ApiClient {
    async fn fetch_prices(&self) -> Result<Vec<PriceTicker>> {
        crate::services::api::prices::get_prices(self).await
    }
}
