//! # Icons Helper Module
//!
//! Glyphs and the token badge fallback. Token icons are addressed by a
//! deterministic URL (see [`shared::utils::icon_url`]); the desktop build
//! renders a one-character badge instead of fetching images.

use egui::RichText;

use crate::app::Asset;
use crate::ui::theme::Theme;

/// Glyphs used on controls
pub mod glyph {
    /// Reverse direction
    pub const REVERSE: &str = "⇅";
    /// Refresh prices
    pub const REFRESH: &str = "⟳";
    /// Success check mark
    pub const CHECK: &str = "✔";
}

/// One-character badge standing in for the token icon.
pub fn token_badge(asset: &Asset, theme: &Theme) -> RichText {
    RichText::new(shared::utils::icon_placeholder(&asset.symbol))
        .strong()
        .color(theme.accent)
}

/// Badge plus symbol, used inline next to amount fields and picker rows.
pub fn token_tag(ui: &mut egui::Ui, asset: &Asset, theme: &Theme) {
    ui.label(token_badge(asset, theme));
    ui.label(RichText::new(asset.symbol.as_str()).strong());
}
