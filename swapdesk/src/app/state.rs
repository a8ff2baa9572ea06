//! # Application State Types
//!
//! All state for the swap form: the token catalog, the two selected sides,
//! both amount fields, validation errors and the submission lifecycle.
//!
//! `SwapState` is the single source of truth. The derivation of the target
//! amount is a pure function of the selected assets and the source amount,
//! recomputed after every mutation that can affect it.

use std::sync::Arc;

use crate::core::config::SwapTimings;
use crate::core::service::PriceSource;
use crate::utils::validation;

/// A tradable token with an optional current unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Unique symbol, e.g. "ETH"
    pub symbol: String,
    /// Human-readable name, e.g. "Ethereum"
    pub name: String,
    /// Unit price in USD, if the feed supplied one
    pub price: Option<f64>,
    /// Deterministic icon URL built from the symbol
    pub icon_url: String,
}

/// Which side of the swap the token picker is selecting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    /// The side the user edits
    Source,
    /// The derived side
    Target,
}

/// Validation errors surfaced on the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapErrors {
    /// Field-level error shown under the amount input
    pub source_amount: Option<String>,
    /// General error shown as a banner above the submit control
    pub general: Option<String>,
}

/// Submission lifecycle of the form.
///
/// A failed settlement returns to `Idle` with `errors.general` set rather
/// than parking in a terminal state; the form stays editable with its
/// amounts intact.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapLifecycle {
    /// Form is editable
    Idle,
    /// A simulated exchange is in flight; the form is frozen
    Submitting,
    /// The exchange settled; the message is shown until dismissed
    Succeeded(String),
}

impl SwapLifecycle {
    /// True while a simulated exchange is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SwapLifecycle::Submitting)
    }
}

/// Comprehensive swap form state.
#[derive(Debug, Clone)]
pub struct SwapState {
    /// Priced assets, deduplicated by symbol and sorted for display
    pub catalog: Vec<Asset>,
    /// True until the catalog fetch settles (either way)
    pub catalog_loading: bool,
    /// Side the user edits
    pub source: Option<Asset>,
    /// Side that receives the derived amount
    pub target: Option<Asset>,
    /// Raw amount text; validated on write, never after the fact
    pub source_amount: String,
    /// Derived amount, read-only from the user's perspective
    pub target_amount: String,
    /// Validation errors currently shown
    pub errors: SwapErrors,
    /// Submission lifecycle
    pub lifecycle: SwapLifecycle,
    /// Guards the two-phase direction reversal; the control is disabled
    /// while true
    pub reversing: bool,
    /// Show token picker popup
    pub show_token_picker: bool,
    /// Which side the picker is selecting for
    pub token_picker_for: PickerTarget,
    /// Filter text for token search
    pub token_filter: String,
}

impl Default for SwapState {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            catalog_loading: true,
            source: None,
            target: None,
            source_amount: String::new(),
            target_amount: String::new(),
            errors: SwapErrors::default(),
            lifecycle: SwapLifecycle::Idle,
            reversing: false,
            show_token_picker: false,
            token_picker_for: PickerTarget::Source,
            token_filter: String::new(),
        }
    }
}

impl SwapState {
    /// The source amount as a number, if the current text parses.
    pub fn parsed_source_amount(&self) -> Option<f64> {
        validation::parse_amount(&self.source_amount)
    }

    /// A usable unit price: present, finite and strictly positive.
    ///
    /// A price of exactly 0 would make the rate infinite in one direction
    /// and collapse it in the other, so it is treated as unknown.
    fn usable_price(side: Option<&Asset>) -> Option<f64> {
        side.and_then(|asset| asset.price)
            .filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Exchange rate `source.price / target.price`, when both prices are
    /// usable and the quotient is finite.
    pub fn exchange_rate(&self) -> Option<f64> {
        let from = Self::usable_price(self.source.as_ref())?;
        let to = Self::usable_price(self.target.as_ref())?;
        let rate = from / to;
        rate.is_finite().then_some(rate)
    }

    /// Recompute the derived target amount from the current state.
    ///
    /// Called after every mutation of the source amount or either asset.
    /// When the rate or the amount is unavailable the target amount is
    /// reset to the empty string.
    pub fn recompute_target_amount(&mut self) {
        self.target_amount = match (self.exchange_rate(), self.parsed_source_amount()) {
            (Some(rate), Some(amount)) => format!("{:.6}", amount * rate),
            _ => String::new(),
        };
    }

    /// Display string for the current rate, e.g. `"1 ETH ≈ 0.050000 BTC"`.
    ///
    /// Empty when either price is unknown.
    pub fn rate_display(&self) -> String {
        match (self.exchange_rate(), &self.source, &self.target) {
            (Some(rate), Some(source), Some(target)) => {
                format!("1 {} ≈ {:.6} {}", source.symbol, rate, target.symbol)
            }
            _ => String::new(),
        }
    }
}

/// Global application state.
#[derive(Clone)]
pub struct AppState {
    /// Swap form state
    pub swap: SwapState,
    /// Injected price source for the catalog load
    pub price_source: Arc<dyn PriceSource>,
    /// Delays for the simulated flows
    pub timings: SwapTimings,
}

impl AppState {
    pub fn new(price_source: Arc<dyn PriceSource>, timings: SwapTimings) -> Self {
        Self {
            swap: SwapState::default(),
            price_source,
            timings,
        }
    }
}
