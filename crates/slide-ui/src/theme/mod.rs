use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Estate Night".to_string(),
            dark_mode: true,
        }
    }
}

/// Apply the showcase theme (deep navy with a gold accent)
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let bg_color = Color32::from_rgb(12, 18, 32);           // Page background
    let panel_bg = Color32::from_rgb(18, 26, 44);           // Section background
    let widget_bg = Color32::from_rgb(30, 40, 62);          // Buttons, dots
    let hover_color = Color32::from_rgb(44, 56, 84);        // Hover state
    let active_color = Color32::from_rgb(58, 72, 104);      // Pressed state
    let accent = accent_color();
    let text_color = Color32::from_rgb(236, 232, 222);      // Warm white

    if theme.dark_mode {
        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.weak_bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);

        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.weak_bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);

        visuals.widgets.active.bg_fill = active_color;
        visuals.widgets.active.weak_bg_fill = active_color;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_color);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    }

    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widgets.rounding = Rounding::same(6.0);
    }

    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    style.spacing.item_spacing = egui::vec2(10.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(26.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Gold accent used for active dots, progress bars and headings
pub fn accent_color() -> Color32 {
    Color32::from_rgb(212, 175, 55)
}

/// Scrim drawn over slide backgrounds so text stays readable
pub fn scrim_color() -> Color32 {
    Color32::from_rgba_unmultiplied(8, 12, 24, 150)
}

/// Color for secondary text
pub fn muted_text_color() -> Color32 {
    Color32::from_rgb(170, 170, 160)
}
