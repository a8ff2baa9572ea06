//! # Catalog Tasks
//!
//! Async task for loading the token catalog from the injected price
//! source.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::market::PriceTicker;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Asset};

/// Fetch the token catalog once.
///
/// Spawns an async task calling the injected `PriceSource` and sends the
/// result via the event channel. A failed fetch is reported but never
/// surfaced as a form error; the catalog just stays empty.
pub(crate) fn fetch_catalog(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let price_source = {
        let state = state.read();
        state.price_source.clone()
    };

    spawn(async move {
        match price_source.fetch_prices().await {
            Ok(tickers) => {
                let assets = build_catalog(tickers);
                tracing::info!(asset_count = assets.len(), "Token catalog loaded");
                let _ = event_tx.send(AppEvent::CatalogLoaded(Ok(assets))).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token catalog fetch failed");
                let _ = event_tx
                    .send(AppEvent::CatalogLoaded(Err(e.to_string())))
                    .await;
            }
        }
    });
}

/// Build the asset catalog from raw tickers.
///
/// Deduplicates by symbol (the last entry wins) and sorts ascending by
/// symbol for display.
pub(crate) fn build_catalog(tickers: Vec<PriceTicker>) -> Vec<Asset> {
    let mut prices_by_symbol: BTreeMap<String, f64> = BTreeMap::new();
    for ticker in tickers {
        prices_by_symbol.insert(ticker.currency, ticker.price);
    }

    prices_by_symbol
        .into_iter()
        .map(|(symbol, price)| Asset {
            name: shared::utils::token_display_name(&symbol),
            icon_url: shared::utils::icon_url(&symbol),
            price: Some(price),
            symbol,
        })
        .collect()
}
