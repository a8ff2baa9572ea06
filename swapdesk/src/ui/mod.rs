//! # GUI Rendering Framework
//!
//! Renders the swap form with **egui widgets**. Rendering reads a cloned
//! snapshot of the state so no lock is held while widgets are laid out;
//! user actions go back through the [`crate::app::App`] handler methods.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, SwapLifecycle};

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    }; // Lock released here - rendering happens without holding it

    egui::CentralPanel::default().show(ctx, |ui| {
        screens::swap::render(ui, &state, app);
    });

    // Token picker popup (if active) - rendered as a window
    if state.swap.show_token_picker {
        widgets::token_picker::render_token_picker(ctx, &state, app);
    }

    // Success modal - shown until explicitly dismissed
    if let SwapLifecycle::Succeeded(message) = &state.swap.lifecycle {
        widgets::result_modal::render_result_modal(ctx, message, app);
    }
}
