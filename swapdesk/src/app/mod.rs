//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the swap form: it owns the shared
//! state, delegates user actions to handlers, spawns async tasks and
//! applies their results.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App (orchestrator)                                         │
//! │  - on_tick() - drains the event channel every frame         │
//! │  - set_source_amount() / select_*_asset() / submit_swap()   │
//! │            │                                                │
//! │  State: Arc<RwLock<AppState>> - locked briefly              │
//! └────────────┬────────────────────────────────────────────────┘
//!              │ async_channel (unbounded)
//! ┌────────────▼────────────────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - catalog::fetch_catalog() - one price fetch per session   │
//! │  - swap::reverse_direction() - two-phase reversal timing    │
//! │  - swap::execute_swap() - simulated settlement delay        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks never mutate state directly. They send [`AppEvent`]s that the
//! main thread applies in [`App::on_tick`], so every mutation reads the
//! current committed state rather than a snapshot captured when the task
//! was spawned.
//!
//! ## Concurrency Guards
//!
//! At most one of each async operation is in flight at a time:
//!
//! - the catalog fetch runs once per activation;
//! - `lifecycle == Submitting` freezes every handler and blocks
//!   re-submission;
//! - `reversing == true` makes new reversal requests no-ops, and a
//!   reversal cannot start while a submission is settling.

mod event_handler;
mod events;
pub(crate) mod handlers;
mod state;
pub(crate) mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::config::SwapTimings;
use crate::core::service::PriceSource;

/// Main application orchestrator.
///
/// Created once per session with an injected [`PriceSource`] and the
/// timing configuration; the GUI calls the public methods below and
/// renders from a clone of the state.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Locks are held for minimal duration; rendering clones a snapshot.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into async tasks.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance.
    ///
    /// The catalog is not loaded here; call [`App::load_catalog`] once the
    /// app is activated. Injecting the price source keeps tests
    /// deterministic - no network is touched until the caller asks for it.
    pub fn new(price_source: Arc<dyn PriceSource>, timings: SwapTimings) -> Self {
        let (event_tx, event_rx) = unbounded();

        App {
            state: Arc::new(RwLock::new(AppState::new(price_source, timings))),
            event_rx,
            event_tx,
        }
    }

    /// Start the one-shot catalog load.
    pub fn load_catalog(&self) {
        tasks::catalog::fetch_catalog(self.state.clone(), self.event_tx.clone());
    }

    /// Called every frame to apply async task results.
    ///
    /// Non-blocking: drains whatever is in the channel and returns.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle one async event result.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== Form Operations - Delegating to Handlers ==========

    /// Set the source amount from user input (validated on write).
    pub fn set_source_amount(&mut self, text: String) {
        handlers::swap::set_source_amount(self.state.clone(), text);
    }

    /// Select the asset for the source side.
    pub fn select_source_asset(&mut self, asset: Asset) {
        handlers::swap::select_asset(self.state.clone(), asset, PickerTarget::Source);
    }

    /// Select the asset for the target side.
    pub fn select_target_asset(&mut self, asset: Asset) {
        handlers::swap::select_asset(self.state.clone(), asset, PickerTarget::Target);
    }

    /// Start the two-phase direction reversal.
    pub fn reverse_direction(&mut self) {
        tasks::swap::reverse_direction(self.state.clone(), self.event_tx.clone());
    }

    /// Validate and submit the swap for simulated settlement.
    pub fn submit_swap(&mut self) {
        tasks::swap::execute_swap(self.state.clone(), self.event_tx.clone());
    }

    /// Dismiss the success result.
    pub fn dismiss_result(&mut self) {
        handlers::swap::dismiss_result(self.state.clone());
    }

    /// Open the token picker for one side.
    pub fn open_token_picker(&mut self, target: PickerTarget) {
        handlers::swap::open_token_picker(self.state.clone(), target);
    }

    /// Close the token picker without selecting.
    pub fn close_token_picker(&mut self) {
        handlers::swap::close_token_picker(self.state.clone());
    }

    /// Get the event sender (for tests and secondary surfaces).
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, Result};
    use async_trait::async_trait;
    use chrono::Utc;
    use shared::dto::market::PriceTicker;

    // ========== Test Fixtures ==========

    struct StaticPrices(Vec<PriceTicker>);

    #[async_trait]
    impl PriceSource for StaticPrices {
        async fn fetch_prices(&self) -> Result<Vec<PriceTicker>> {
            Ok(self.0.clone())
        }
    }

    struct FailingPrices;

    #[async_trait]
    impl PriceSource for FailingPrices {
        async fn fetch_prices(&self) -> Result<Vec<PriceTicker>> {
            Err(AppError::DataUnavailable("connection refused".to_string()))
        }
    }

    fn ticker(symbol: &str, price: f64) -> PriceTicker {
        PriceTicker {
            currency: symbol.to_string(),
            date: Utc::now(),
            price,
        }
    }

    /// App backed by a canned ETH/BTC/USDC catalog and zero delays.
    fn test_app() -> App {
        App::new(
            Arc::new(StaticPrices(vec![
                ticker("ETH", 2000.0),
                ticker("BTC", 40000.0),
                ticker("USDC", 1.0),
            ])),
            SwapTimings::instant(),
        )
    }

    /// Receive and apply the next `count` events.
    async fn pump(app: &mut App, count: usize) {
        for _ in 0..count {
            let event = app.event_rx.recv().await.expect("event expected in test");
            app.handle_event(event);
        }
    }

    async fn load_catalog(app: &mut App) {
        app.load_catalog();
        pump(app, 1).await;
    }

    fn catalog_asset(app: &App, symbol: &str) -> Asset {
        let state = app.state.read();
        state
            .swap
            .catalog
            .iter()
            .find(|a| a.symbol == symbol)
            .expect("asset should exist in test")
            .clone()
    }

    // ========== Catalog Loader Tests ==========

    #[tokio::test]
    async fn test_catalog_load_picks_eth_btc_defaults() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        let state = app.state.read();
        assert!(!state.swap.catalog_loading);
        assert_eq!(state.swap.catalog.len(), 3);
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "ETH");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "BTC");
    }

    #[tokio::test]
    async fn test_catalog_load_falls_back_to_first_two() {
        let mut app = App::new(
            Arc::new(StaticPrices(vec![
                ticker("USDT", 1.0),
                ticker("SWTH", 0.004),
            ])),
            SwapTimings::instant(),
        );
        load_catalog(&mut app).await;

        let state = app.state.read();
        // Catalog is sorted by symbol: SWTH, USDT
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "SWTH");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "USDT");
    }

    #[tokio::test]
    async fn test_catalog_defaults_stay_distinct_when_btc_is_first() {
        let mut app = App::new(
            Arc::new(StaticPrices(vec![
                ticker("USDT", 1.0),
                ticker("BTC", 40000.0),
            ])),
            SwapTimings::instant(),
        );
        load_catalog(&mut app).await;

        let state = app.state.read();
        // No ETH, so the source falls back to the first entry - BTC. The
        // preferred BTC target would duplicate it and yields to USDT.
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "BTC");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "USDT");
    }

    #[tokio::test]
    async fn test_catalog_defaults_stay_distinct_when_second_entry_is_eth() {
        let mut app = App::new(
            Arc::new(StaticPrices(vec![
                ticker("ANC", 1.0),
                ticker("ETH", 2000.0),
            ])),
            SwapTimings::instant(),
        );
        load_catalog(&mut app).await;

        let state = app.state.read();
        // Sorted catalog: ANC, ETH. ETH is the source; with no BTC the
        // second entry is the source itself, so the target falls to ANC.
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "ETH");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "ANC");
    }

    #[tokio::test]
    async fn test_catalog_reload_resets_selection_and_amounts() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        let usdc = catalog_asset(&app, "USDC");
        app.select_source_asset(usdc);
        app.set_source_amount("2".to_string());

        load_catalog(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "ETH");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "BTC");
        assert_eq!(state.swap.source_amount, "");
        assert_eq!(state.swap.target_amount, "");
    }

    #[tokio::test]
    async fn test_catalog_load_skips_defaults_for_single_asset() {
        let mut app = App::new(
            Arc::new(StaticPrices(vec![ticker("ETH", 2000.0)])),
            SwapTimings::instant(),
        );
        load_catalog(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.swap.catalog.len(), 1);
        assert!(state.swap.source.is_none());
        assert!(state.swap.target.is_none());
    }

    #[tokio::test]
    async fn test_catalog_failure_leaves_empty_catalog_and_no_error() {
        let mut app = App::new(Arc::new(FailingPrices), SwapTimings::instant());
        load_catalog(&mut app).await;

        let state = app.state.read();
        assert!(!state.swap.catalog_loading);
        assert!(state.swap.catalog.is_empty());
        assert!(state.swap.source.is_none());
        assert!(state.swap.errors.general.is_none());
        assert!(state.swap.errors.source_amount.is_none());
    }

    // ========== Derivation Tests ==========

    #[tokio::test]
    async fn test_entering_amount_derives_target() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        app.set_source_amount("2".to_string());

        let state = app.state.read();
        assert_eq!(state.swap.target_amount, "0.100000");
        assert_eq!(state.swap.rate_display(), "1 ETH ≈ 0.050000 BTC");
    }

    #[tokio::test]
    async fn test_clearing_amount_clears_target() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        app.set_source_amount("2".to_string());
        app.set_source_amount(String::new());

        let state = app.state.read();
        assert_eq!(state.swap.target_amount, "");
    }

    #[tokio::test]
    async fn test_invalid_amount_text_is_rejected_at_boundary() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        app.set_source_amount("2".to_string());
        app.set_source_amount("2x".to_string());
        app.set_source_amount("1.2.3".to_string());

        let state = app.state.read();
        assert_eq!(state.swap.source_amount, "2");
        assert_eq!(state.swap.target_amount, "0.100000");
    }

    #[tokio::test]
    async fn test_selecting_asset_rederives_target() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("2".to_string());

        let usdc = catalog_asset(&app, "USDC");
        app.select_source_asset(usdc);

        let state = app.state.read();
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "USDC");
        assert_eq!(state.swap.target_amount, "0.000050");
    }

    // ========== Selection Tests ==========

    #[tokio::test]
    async fn test_selecting_opposite_symbol_swaps_sides() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        // Target side picks ETH, which the source currently holds
        let eth = catalog_asset(&app, "ETH");
        app.select_target_asset(eth);

        let state = app.state.read();
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "BTC");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "ETH");
    }

    #[tokio::test]
    async fn test_selecting_source_equal_to_target_swaps_sides() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        let btc = catalog_asset(&app, "BTC");
        app.select_source_asset(btc);

        let state = app.state.read();
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "BTC");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "ETH");
    }

    #[tokio::test]
    async fn test_selection_closes_picker_and_clears_amount_error() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        // Provoke the field error, then select a token
        app.submit_swap();
        {
            let state = app.state.read();
            assert!(state.swap.errors.source_amount.is_some());
        }

        app.open_token_picker(PickerTarget::Source);
        let usdc = catalog_asset(&app, "USDC");
        app.select_source_asset(usdc);

        let state = app.state.read();
        assert!(!state.swap.show_token_picker);
        assert!(state.swap.errors.source_amount.is_none());
    }

    // ========== Direction Reversal Tests ==========

    #[tokio::test]
    async fn test_reversal_exchanges_assets_and_amounts() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("2".to_string());

        app.reverse_direction();
        {
            let state = app.state.read();
            assert!(state.swap.reversing);
        }
        pump(&mut app, 2).await;

        let state = app.state.read();
        assert!(!state.swap.reversing);
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "BTC");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "ETH");
        assert_eq!(state.swap.source_amount, "0.100000");
        assert_eq!(state.swap.target_amount, "2");
    }

    #[tokio::test]
    async fn test_double_reversal_restores_original_tuple() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("2".to_string());

        app.reverse_direction();
        pump(&mut app, 2).await;
        app.reverse_direction();
        pump(&mut app, 2).await;

        let state = app.state.read();
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "ETH");
        assert_eq!(state.swap.target.as_ref().unwrap().symbol, "BTC");
        assert_eq!(state.swap.source_amount, "2");
        assert_eq!(state.swap.target_amount, "0.100000");
    }

    #[tokio::test]
    async fn test_reversal_is_not_reentrant() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("2".to_string());

        app.reverse_direction();
        app.reverse_direction(); // ignored: reversal already in flight
        pump(&mut app, 2).await;

        // Only one reversal ran: sides are exchanged once and the channel
        // holds no further events.
        let state = app.state.read();
        assert_eq!(state.swap.source.as_ref().unwrap().symbol, "BTC");
        drop(state);
        assert!(app.event_rx.try_recv().is_err());
    }

    // ========== Submission Tests ==========

    #[tokio::test]
    async fn test_submit_without_assets_sets_general_error() {
        let mut app = App::new(Arc::new(FailingPrices), SwapTimings::instant());
        load_catalog(&mut app).await;

        app.submit_swap();

        let state = app.state.read();
        assert_eq!(state.swap.lifecycle, SwapLifecycle::Idle);
        assert_eq!(
            state.swap.errors.general.as_deref(),
            Some("Please select tokens for the swap")
        );
        // Rate display must not blow up without a selection
        assert_eq!(state.swap.rate_display(), "");
        drop(state);
        assert!(app.event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_with_empty_amount_sets_field_error() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        app.submit_swap();

        let state = app.state.read();
        assert_eq!(state.swap.lifecycle, SwapLifecycle::Idle);
        assert_eq!(
            state.swap.errors.source_amount.as_deref(),
            Some("Please enter a valid amount")
        );
    }

    #[tokio::test]
    async fn test_submit_with_zero_amount_sets_field_error() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("0".to_string());

        app.submit_swap();

        let state = app.state.read();
        assert_eq!(state.swap.lifecycle, SwapLifecycle::Idle);
        assert!(state.swap.errors.source_amount.is_some());
        drop(state);
        assert!(app.event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_typing_clears_field_error() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        app.submit_swap();
        app.set_source_amount("5".to_string());

        let state = app.state.read();
        assert!(state.swap.errors.source_amount.is_none());
    }

    #[tokio::test]
    async fn test_successful_submission_confirms_and_clears_amounts() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("1".to_string());

        app.submit_swap();
        {
            let state = app.state.read();
            assert_eq!(state.swap.lifecycle, SwapLifecycle::Submitting);
        }
        pump(&mut app, 1).await;

        let state = app.state.read();
        match &state.swap.lifecycle {
            SwapLifecycle::Succeeded(message) => {
                assert!(message.contains("1 ETH"), "message was: {}", message);
                assert!(message.contains("0.050000 BTC"), "message was: {}", message);
            }
            other => panic!("expected Succeeded, got {:?}", other),
        }
        assert_eq!(state.swap.source_amount, "");
        assert_eq!(state.swap.target_amount, "");
        assert!(state.swap.errors.general.is_none());
    }

    #[tokio::test]
    async fn test_form_is_frozen_while_submitting() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("1".to_string());
        app.submit_swap();

        // Every mutation during the settlement window is a no-op
        app.set_source_amount("9".to_string());
        let usdc = catalog_asset(&app, "USDC");
        app.select_source_asset(usdc);
        app.reverse_direction();
        app.submit_swap();

        {
            let state = app.state.read();
            assert_eq!(state.swap.source_amount, "1");
            assert_eq!(state.swap.source.as_ref().unwrap().symbol, "ETH");
            assert!(!state.swap.reversing);
        }

        // Exactly one settlement event arrives
        pump(&mut app, 1).await;
        assert!(app.event_rx.try_recv().is_err());

        let state = app.state.read();
        assert!(matches!(state.swap.lifecycle, SwapLifecycle::Succeeded(_)));
    }

    #[tokio::test]
    async fn test_dismiss_result_returns_to_idle() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("1".to_string());
        app.submit_swap();
        pump(&mut app, 1).await;

        app.dismiss_result();

        let state = app.state.read();
        assert_eq!(state.swap.lifecycle, SwapLifecycle::Idle);
        assert_eq!(state.swap.source_amount, "");
    }

    #[tokio::test]
    async fn test_settlement_failure_returns_editable_form() {
        let mut app = test_app();
        load_catalog(&mut app).await;
        app.set_source_amount("1".to_string());
        app.submit_swap();

        // Drop the real settlement and inject a failure in its place
        let _ = app.event_rx.recv().await.expect("settlement event");
        app.handle_event(AppEvent::SwapSettled(Err("simulated outage".to_string())));

        let state = app.state.read();
        assert_eq!(state.swap.lifecycle, SwapLifecycle::Idle);
        assert_eq!(
            state.swap.errors.general.as_deref(),
            Some("Swap failed. Please try again.")
        );
        // Amounts are only cleared on success
        assert_eq!(state.swap.source_amount, "1");
        assert_eq!(state.swap.target_amount, "0.050000");
    }

    // ========== Picker Tests ==========

    #[tokio::test]
    async fn test_open_token_picker_resets_filter() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        {
            let mut state = app.state.write();
            state.swap.token_filter = "btc".to_string();
        }
        app.open_token_picker(PickerTarget::Target);

        let state = app.state.read();
        assert!(state.swap.show_token_picker);
        assert_eq!(state.swap.token_picker_for, PickerTarget::Target);
        assert_eq!(state.swap.token_filter, "");
    }

    #[tokio::test]
    async fn test_close_token_picker() {
        let mut app = test_app();
        load_catalog(&mut app).await;

        app.open_token_picker(PickerTarget::Source);
        app.close_token_picker();

        let state = app.state.read();
        assert!(!state.swap.show_token_picker);
    }
}
