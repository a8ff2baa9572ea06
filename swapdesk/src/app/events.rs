//! # Application Events
//!
//! Event types for async task communication between background tasks and
//! the main thread.

use crate::app::state::Asset;

/// Async task results sent to the main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Catalog fetch settled (assets on success, message on failure)
    CatalogLoaded(Result<Vec<Asset>, String>),
    /// Direction reversal reached its midpoint: exchange the two sides now
    ReversalApplied,
    /// Direction reversal finished: re-enable the control
    ReversalSettled,
    /// Simulated exchange settled (confirmation message on success)
    SwapSettled(Result<String, String>),
}
