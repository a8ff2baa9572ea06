//! # Price Feed Endpoint
//!
//! Fetches the full ticker list from the public price feed.

use shared::dto::market::PriceTicker;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Get the current token prices.
#[tracing::instrument(skip(client))]
pub async fn get_prices(client: &ApiClient) -> Result<Vec<PriceTicker>> {
    let start = std::time::Instant::now();
    let url = ApiClient::prices_url();

    tracing::debug!("Fetching token prices");

    let response = client.client.get(url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Price fetch network error");
        AppError::from(e)
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let tickers = response.json::<Vec<PriceTicker>>().await.map_err(|e| {
            tracing::error!(error = %e, "Price response parse error");
            AppError::DataUnavailable(format!("failed to parse price feed: {}", e))
        })?;

        tracing::debug!(
            duration_ms = duration.as_millis(),
            ticker_count = tickers.len(),
            "Prices fetched successfully"
        );
        Ok(tickers)
    } else {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Price fetch failed"
        );
        Err(AppError::DataUnavailable(format!(
            "price feed returned {}",
            status
        )))
    }
}
