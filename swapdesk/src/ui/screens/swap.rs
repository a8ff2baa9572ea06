//! # Swap Screen
//!
//! The swap form: two token sides, the reversal control between them, the
//! rate line, the error banner and the submit control.

use crate::app::{App, AppState, PickerTarget};
use crate::ui::theme::Theme;
use crate::ui::widgets::{amount_input, icons::glyph};

/// Render the swap form screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    let submitting = state.swap.lifecycle.is_submitting();

    ui.vertical_centered(|ui| {
        ui.set_max_width(420.0);
        ui.add_space(24.0);

        // Header with refresh control, disabled while a load or a
        // submission is in flight
        ui.horizontal(|ui| {
            ui.heading("Swap Tokens");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let refresh = egui::Button::new(glyph::REFRESH);
                let can_refresh = !state.swap.catalog_loading && !submitting;
                if ui
                    .add_enabled(can_refresh, refresh)
                    .on_hover_text("Refresh prices")
                    .clicked()
                {
                    {
                        let mut state_write = app.state.write();
                        state_write.swap.catalog_loading = true;
                    }
                    app.load_catalog();
                }
            });
        });
        ui.add_space(12.0);

        if state.swap.catalog_loading {
            ui.add_space(48.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.colored_label(theme.dim, "Loading tokens...");
            return;
        }

        if state.swap.catalog.is_empty() {
            ui.add_space(48.0);
            ui.colored_label(theme.dim, "No price data available. Try refreshing.");
            return;
        }

        // From side: token selector + editable amount
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, "From");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!submitting, egui::Button::new(side_label(state, PickerTarget::Source)))
                        .clicked()
                    {
                        app.open_token_picker(PickerTarget::Source);
                    }
                });
            });
            amount_input::render_editable(ui, state, app, &theme);
        });

        // Reversal control between the two sides
        ui.add_space(4.0);
        let reversal_enabled = !state.swap.reversing && !submitting;
        if ui
            .add_enabled(reversal_enabled, egui::Button::new(glyph::REVERSE))
            .on_hover_text("Reverse direction")
            .clicked()
        {
            app.reverse_direction();
        }
        ui.add_space(4.0);

        // To side: token selector + derived amount (read-only)
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, "To");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!submitting, egui::Button::new(side_label(state, PickerTarget::Target)))
                        .clicked()
                    {
                        app.open_token_picker(PickerTarget::Target);
                    }
                });
            });
            amount_input::render_readonly(ui, state, &theme);
        });

        // Rate line
        let rate = state.swap.rate_display();
        if !rate.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(theme.dim, rate);
        }

        // General error banner
        if let Some(err) = &state.swap.errors.general {
            ui.add_space(6.0);
            ui.colored_label(theme.error, err);
        }

        // Submit control
        ui.add_space(16.0);
        let submit_label = if submitting { "Swapping..." } else { "Swap Tokens" };
        let submit = egui::Button::new(submit_label)
            .min_size(egui::vec2(ui.available_width(), 36.0))
            .fill(theme.accent);
        if ui.add_enabled(!submitting, submit).clicked() {
            app.submit_swap();
        }
    });
}

/// Label for a token selector button: the selected symbol or a prompt.
fn side_label(state: &AppState, side: PickerTarget) -> String {
    let selected = match side {
        PickerTarget::Source => state.swap.source.as_ref(),
        PickerTarget::Target => state.swap.target.as_ref(),
    };
    match selected {
        Some(asset) => format!("{} ▾", asset.symbol),
        None => "Select token ▾".to_string(),
    }
}
