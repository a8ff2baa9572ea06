//! # Token Picker Widget
//!
//! Searchable popup for selecting a token, filtered live over symbol and
//! name.

use crate::app::{App, AppState, Asset, PickerTarget};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons;

/// Render token picker popup
pub fn render_token_picker(ctx: &egui::Context, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let picker_for = state.swap.token_picker_for;

    egui::Window::new("Select Token")
        .collapsible(false)
        .resizable(true)
        .default_size([360.0, 420.0])
        .show(ctx, |ui| {
            // Search input
            ui.horizontal(|ui| {
                ui.label("Search:");
                let mut filter = state.swap.token_filter.clone();
                if ui.text_edit_singleline(&mut filter).changed() {
                    let mut state_write = app.state.write();
                    state_write.swap.token_filter = filter;
                }
            });

            ui.separator();
            ui.add_space(5.0);

            // Filter tokens over symbol and name
            let filter_lower = state.swap.token_filter.to_lowercase();
            let filtered: Vec<&Asset> = state
                .swap
                .catalog
                .iter()
                .filter(|asset| {
                    filter_lower.is_empty()
                        || asset.symbol.to_lowercase().contains(&filter_lower)
                        || asset.name.to_lowercase().contains(&filter_lower)
                })
                .collect();

            if filtered.is_empty() {
                ui.colored_label(theme.dim, "No tokens match");
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("token_picker")
                    .num_columns(4)
                    .spacing([10.0, 5.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for asset in filtered {
                            ui.label(icons::token_badge(asset, &theme));

                            if ui.selectable_label(false, &asset.symbol).clicked() {
                                match picker_for {
                                    PickerTarget::Source => {
                                        app.select_source_asset(asset.clone())
                                    }
                                    PickerTarget::Target => {
                                        app.select_target_asset(asset.clone())
                                    }
                                }
                            }

                            ui.colored_label(theme.dim, &asset.name);
                            match asset.price {
                                Some(price) => ui.monospace(format!("${:.4}", price)),
                                None => ui.monospace("-"),
                            };
                            ui.end_row();
                        }
                    });
            });

            ui.separator();
            ui.add_space(5.0);

            if ui.button("Cancel").clicked() {
                app.close_token_picker();
            }
        });
}
