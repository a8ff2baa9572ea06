//! # Event Handler
//!
//! Handles async event results from background tasks, updating the
//! application state accordingly. All mutation happens on the main thread
//! against the current committed state, never against a snapshot captured
//! when the task was spawned.

use crate::app::state::{Asset, SwapErrors, SwapLifecycle};
use crate::app::{App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::CatalogLoaded(result) => self.handle_catalog_loaded(result),
            AppEvent::ReversalApplied => self.handle_reversal_applied(),
            AppEvent::ReversalSettled => self.handle_reversal_settled(),
            AppEvent::SwapSettled(result) => self.handle_swap_settled(result),
        }
    }
}

impl App {
    /// Install the loaded catalog, reset the form and pick the initial
    /// pair.
    ///
    /// Defaults are ETH for the source and BTC for the target, falling
    /// back to the first and second catalog entries; with fewer than two
    /// assets nothing is selected. The two sides must hold distinct
    /// tokens, so a preferred target that collides with the source yields
    /// to the first other asset. A failed fetch leaves the previous
    /// catalog and form untouched - the price source may fail silently
    /// from the form's point of view.
    fn handle_catalog_loaded(&mut self, result: Result<Vec<Asset>, String>) {
        let mut state = self.state.write();
        let swap = &mut state.swap;
        swap.catalog_loading = false;

        match result {
            Ok(assets) => {
                swap.catalog = assets;
                swap.source = None;
                swap.target = None;
                swap.source_amount.clear();
                swap.target_amount.clear();
                swap.errors = SwapErrors::default();

                if swap.catalog.len() >= 2 {
                    let source = swap
                        .catalog
                        .iter()
                        .find(|a| a.symbol == "ETH")
                        .unwrap_or(&swap.catalog[0])
                        .clone();
                    let preferred = swap
                        .catalog
                        .iter()
                        .find(|a| a.symbol == "BTC")
                        .unwrap_or(&swap.catalog[1]);
                    let target = if preferred.symbol == source.symbol {
                        swap.catalog.iter().find(|a| a.symbol != source.symbol)
                    } else {
                        Some(preferred)
                    }
                    .cloned();
                    swap.source = Some(source);
                    swap.target = target;
                }
                swap.recompute_target_amount();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Starting with an empty token list");
            }
        }
    }

    /// Midpoint of the reversal: exchange both assets and both amounts.
    ///
    /// The amounts are exchanged verbatim, with no re-derivation, so a
    /// second reversal restores the exact original tuple.
    fn handle_reversal_applied(&mut self) {
        let mut state = self.state.write();
        let swap = &mut state.swap;
        std::mem::swap(&mut swap.source, &mut swap.target);
        std::mem::swap(&mut swap.source_amount, &mut swap.target_amount);
    }

    fn handle_reversal_settled(&mut self) {
        let mut state = self.state.write();
        state.swap.reversing = false;
    }

    /// Settlement of the simulated exchange.
    ///
    /// Success clears both amounts and surfaces the confirmation message
    /// until the user dismisses it. Failure returns the editable form with
    /// its amounts intact and a retry banner.
    fn handle_swap_settled(&mut self, result: Result<String, String>) {
        let mut state = self.state.write();
        let swap = &mut state.swap;

        match result {
            Ok(message) => {
                swap.source_amount.clear();
                swap.target_amount.clear();
                swap.lifecycle = SwapLifecycle::Succeeded(message);
                tracing::info!("Swap settled");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Simulated exchange failed");
                swap.errors.general = Some("Swap failed. Please try again.".to_string());
                swap.lifecycle = SwapLifecycle::Idle;
            }
        }
    }
}
