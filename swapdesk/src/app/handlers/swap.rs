//! # Swap Handlers
//!
//! Handlers for swap form actions: amount input, token selection and
//! result dismissal. All handlers are no-ops while a submission is in
//! flight, which keeps the form frozen for the whole settlement window.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, Asset, PickerTarget, SwapLifecycle};
use crate::utils::validation;

/// Set the source amount from user input.
///
/// Text that is not an unsigned decimal is rejected at this boundary; the
/// state keeps its previous value and the widget snaps back on the next
/// frame. A previously shown amount error is cleared on every accepted
/// write.
pub(crate) fn set_source_amount(state: Arc<RwLock<AppState>>, text: String) {
    let mut state = state.write();
    if state.swap.lifecycle.is_submitting() {
        return;
    }
    if !validation::is_amount_text(&text) {
        return;
    }

    state.swap.source_amount = text;
    state.swap.errors.source_amount = None;
    state.swap.recompute_target_amount();
}

/// Select an asset for one side of the swap.
///
/// Picking the symbol currently held by the opposite side exchanges the
/// two slots instead of rejecting the input, so the sides can never hold
/// the same token.
pub(crate) fn select_asset(state: Arc<RwLock<AppState>>, asset: Asset, target: PickerTarget) {
    let mut state = state.write();
    if state.swap.lifecycle.is_submitting() {
        return;
    }

    let swap = &mut state.swap;
    match target {
        PickerTarget::Source => {
            if swap.target.as_ref().is_some_and(|t| t.symbol == asset.symbol) {
                swap.target = swap.source.take();
            }
            swap.source = Some(asset);
        }
        PickerTarget::Target => {
            if swap.source.as_ref().is_some_and(|s| s.symbol == asset.symbol) {
                swap.source = swap.target.take();
            }
            swap.target = Some(asset);
        }
    }

    swap.errors.source_amount = None;
    swap.show_token_picker = false;
    swap.recompute_target_amount();
}

/// Open the token picker popup for one side.
pub(crate) fn open_token_picker(state: Arc<RwLock<AppState>>, target: PickerTarget) {
    let mut state = state.write();
    if state.swap.lifecycle.is_submitting() {
        return;
    }

    state.swap.show_token_picker = true;
    state.swap.token_picker_for = target;
    state.swap.token_filter.clear();
}

/// Close the token picker popup without selecting.
pub(crate) fn close_token_picker(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.swap.show_token_picker = false;
}

/// Dismiss the success result, returning the form to `Idle`.
///
/// The amounts were already cleared when the swap settled.
pub(crate) fn dismiss_result(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if matches!(state.swap.lifecycle, SwapLifecycle::Succeeded(_)) {
        state.swap.lifecycle = SwapLifecycle::Idle;
    }
}
