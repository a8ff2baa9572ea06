//! # Timing Configuration
//!
//! Durations for the two simulated delays in the swap flow: the two-phase
//! direction reversal and the settlement wait. The form's correctness only
//! requires that each delay eventually completes; presentation layers may
//! animate over the same windows.

use std::time::Duration;

/// Delays used by the swap flow's async tasks.
#[derive(Debug, Clone)]
pub struct SwapTimings {
    /// Wait before the reversal exchanges the two sides, giving the UI
    /// time to start its transition.
    pub reversal_lead: Duration,
    /// Wait after the exchange before the reversal control is re-enabled.
    pub reversal_settle: Duration,
    /// Simulated network settlement for a submitted swap.
    pub settlement_delay: Duration,
}

impl Default for SwapTimings {
    fn default() -> Self {
        Self {
            reversal_lead: Duration::from_millis(300),
            reversal_settle: Duration::from_millis(10),
            settlement_delay: Duration::from_millis(1500),
        }
    }
}

impl SwapTimings {
    /// Zero-delay timings for deterministic tests.
    pub fn instant() -> Self {
        Self {
            reversal_lead: Duration::ZERO,
            reversal_settle: Duration::ZERO,
            settlement_delay: Duration::ZERO,
        }
    }
}
