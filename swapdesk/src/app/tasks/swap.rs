//! # Swap Tasks
//!
//! Async tasks for the two timed flows of the form: the two-phase
//! direction reversal and the simulated swap settlement. Both are
//! non-reentrant; the guards are taken under the write lock before the
//! task is spawned.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, SwapErrors, SwapLifecycle};

/// Start the two-phase direction reversal.
///
/// Phase order is strict: the `reversing` flag is raised immediately, the
/// field exchange happens after `reversal_lead`, and the flag is cleared
/// after a further `reversal_settle`. New reversal requests are ignored
/// while a reversal or a submission is in flight.
pub(crate) fn reverse_direction(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let timings = {
        let mut state = state.write();
        if state.swap.reversing || state.swap.lifecycle.is_submitting() {
            return;
        }
        state.swap.reversing = true;
        state.timings.clone()
    };

    spawn(async move {
        tokio::time::sleep(timings.reversal_lead).await;
        let _ = event_tx.send(AppEvent::ReversalApplied).await;
        tokio::time::sleep(timings.reversal_settle).await;
        let _ = event_tx.send(AppEvent::ReversalSettled).await;
    });
}

/// Validate the form and run the simulated exchange.
///
/// Validation happens synchronously under the write lock; only a form
/// that passes transitions to `Submitting`. The confirmation message is
/// built from the amounts as they are right now, because settlement
/// clears them.
pub(crate) fn execute_swap(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (message, delay) = {
        let mut state = state.write();
        if state.swap.lifecycle.is_submitting() {
            return;
        }

        let delay = state.timings.settlement_delay;
        let swap = &mut state.swap;

        let (source_symbol, target_symbol) = match (swap.source.as_ref(), swap.target.as_ref()) {
            (Some(source), Some(target)) => (source.symbol.clone(), target.symbol.clone()),
            _ => {
                swap.errors = SwapErrors {
                    general: Some("Please select tokens for the swap".to_string()),
                    source_amount: None,
                };
                return;
            }
        };

        match swap.parsed_source_amount() {
            Some(amount) if amount > 0.0 => {}
            _ => {
                swap.errors = SwapErrors {
                    source_amount: Some("Please enter a valid amount".to_string()),
                    general: None,
                };
                return;
            }
        }

        let message = format!(
            "Successfully swapped {} {} for {} {}",
            swap.source_amount, source_symbol, swap.target_amount, target_symbol
        );

        swap.errors = SwapErrors::default();
        swap.lifecycle = SwapLifecycle::Submitting;

        tracing::info!(
            source = %source_symbol,
            target = %target_symbol,
            amount = %swap.source_amount,
            "Swap submitted - settling"
        );

        (message, delay)
    };

    spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = event_tx.send(AppEvent::SwapSettled(Ok(message))).await;
    });
}
