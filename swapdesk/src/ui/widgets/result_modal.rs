//! # Result Modal
//!
//! Success summary shown after a swap settles, dismissed explicitly by
//! the user.

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::glyph;

/// Render the transaction-complete modal
pub fn render_result_modal(ctx: &egui::Context, message: &str, app: &mut App) {
    let theme = Theme::default();

    egui::Window::new("Transaction Complete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(glyph::CHECK)
                        .size(32.0)
                        .color(theme.success),
                );
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(12.0);

                let close = egui::Button::new("Close")
                    .min_size(egui::vec2(160.0, 32.0))
                    .fill(theme.accent);
                if ui.add(close).clicked() {
                    app.dismiss_result();
                }
                ui.add_space(4.0);
            });
        });
}
