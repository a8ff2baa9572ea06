//! # GUI Theme
//!
//! Dark swap-form theme for egui: near-black panels with an indigo accent.

use egui::{Color32, Context, Stroke, Visuals};

/// Color palette used across the UI.
pub struct Theme {
    /// Window background
    pub background: Color32,
    /// Grouped panel fill
    pub panel: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text (labels, hints, the rate line)
    pub dim: Color32,
    /// Accent for actions and highlights
    pub accent: Color32,
    /// Error text and banners
    pub error: Color32,
    /// Success indicator
    pub success: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(15, 17, 26),
            panel: Color32::from_rgb(24, 27, 40),
            text: Color32::from_rgb(235, 236, 240),
            dim: Color32::from_rgb(148, 152, 166),
            accent: Color32::from_rgb(99, 102, 241),
            error: Color32::from_rgb(239, 83, 80),
            success: Color32::from_rgb(102, 187, 106),
        }
    }
}

impl Theme {
    /// Apply the palette to the egui context once at startup.
    pub fn apply(ctx: &Context) {
        let theme = Theme::default();

        let mut visuals = Visuals::dark();
        visuals.panel_fill = theme.background;
        visuals.window_fill = theme.panel;
        visuals.override_text_color = Some(theme.text);
        visuals.selection.bg_fill = theme.accent;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, theme.accent);

        ctx.set_visuals(visuals);
    }
}
