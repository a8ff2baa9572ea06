//! # Widgets
//!
//! Custom UI components for the swap form.

pub mod amount_input;
pub mod icons;
pub mod result_modal;
pub mod token_picker;
