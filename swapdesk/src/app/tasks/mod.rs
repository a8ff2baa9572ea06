//! # Async Tasks
//!
//! Async task spawning for the catalog load, direction reversal and the
//! simulated swap settlement.

pub mod catalog;
pub mod swap;
