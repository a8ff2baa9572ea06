//! # User Action Handlers
//!
//! Synchronous handlers for user actions on the swap form.

pub mod swap;
