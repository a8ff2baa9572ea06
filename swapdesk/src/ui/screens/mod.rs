//! # Screens
//!
//! Screen-level rendering. The application has a single screen: the swap
//! form.

pub mod swap;
