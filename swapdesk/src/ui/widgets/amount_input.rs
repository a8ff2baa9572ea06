//! # Amount Input Widget
//!
//! The two amount fields of the form. The editable side routes every
//! change through the amount handler, which rejects text that is not an
//! unsigned decimal; the widget shows the committed state again on the
//! next frame, so invalid keystrokes simply never appear.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons;

/// Render the editable source-amount field with its token tag and the
/// field-level error underneath.
pub fn render_editable(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let submitting = state.swap.lifecycle.is_submitting();

    ui.horizontal(|ui| {
        let mut text = state.swap.source_amount.clone();
        let field = egui::TextEdit::singleline(&mut text)
            .hint_text("0.00")
            .desired_width(ui.available_width() - 96.0);
        let response = ui.add_enabled(!submitting, field);
        if response.changed() {
            app.set_source_amount(text);
        }

        if let Some(asset) = state.swap.source.as_ref() {
            icons::token_tag(ui, asset, theme);
        }
    });

    if let Some(err) = &state.swap.errors.source_amount {
        ui.colored_label(theme.error, err);
    }
}

/// Render the derived target-amount field (read-only).
pub fn render_readonly(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.horizontal(|ui| {
        let mut text = state.swap.target_amount.clone();
        let field = egui::TextEdit::singleline(&mut text)
            .hint_text("0.00")
            .desired_width(ui.available_width() - 96.0);
        ui.add_enabled(false, field);

        if let Some(asset) = state.swap.target.as_ref() {
            icons::token_tag(ui, asset, theme);
        }
    });
}
