//! Application style configuration

use eframe::egui;

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    // Panels sit a step brighter than the default viewport background so
    // the 3D area reads as the darkest surface on screen.
    style.visuals.panel_fill = egui::Color32::from_rgb(32, 32, 38);
    style.visuals.window_fill = egui::Color32::from_rgb(38, 38, 44);

    style.visuals.window_corner_radius = egui::CornerRadius::same(5);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(5);
    for widget in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = egui::CornerRadius::same(2);
    }

    style.visuals.selection.bg_fill = egui::Color32::from_rgb(46, 92, 150);

    style.spacing.item_spacing = egui::vec2(6.0, 5.0);
    style.spacing.button_padding = egui::vec2(8.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(5);

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    use egui::{FontId, TextStyle};

    let text_styles = [
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
        (TextStyle::Small, FontId::proportional(font_size * 0.85)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.25)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
    ];
    for (text_style, font_id) in text_styles {
        style.text_styles.insert(text_style, font_id);
    }
}
