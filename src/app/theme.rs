// Visual theme shared by every panel

use eframe::egui;

pub mod colors {
    use eframe::egui::Color32;

    pub const BG_DARK: Color32 = Color32::from_rgb(23, 25, 30);
    pub const BG_MID: Color32 = Color32::from_rgb(32, 35, 42);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(47, 51, 61);
    pub const BG_HOVER: Color32 = Color32::from_rgb(58, 63, 75);

    pub const ACCENT: Color32 = Color32::from_rgb(96, 156, 245);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(222, 226, 233);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(128, 134, 146);

    pub const SUCCESS: Color32 = Color32::from_rgb(106, 188, 122);
    pub const ERROR: Color32 = Color32::from_rgb(222, 92, 92);
}

pub fn apply_theme(ctx: &egui::Context) {
    // Phosphor glyphs are used on most buttons, so the font goes in here
    // alongside the visuals.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = colors::BG_MID;
    visuals.window_fill = colors::BG_MID;
    visuals.extreme_bg_color = colors::BG_DARK;
    visuals.selection.bg_fill = colors::ACCENT.gamma_multiply(0.4);
    visuals.widgets.noninteractive.bg_fill = colors::BG_MID;
    visuals.widgets.inactive.bg_fill = colors::BG_LIGHT;
    visuals.widgets.inactive.weak_bg_fill = colors::BG_LIGHT;
    visuals.widgets.hovered.bg_fill = colors::BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = colors::BG_HOVER;
    visuals.widgets.active.bg_fill = colors::ACCENT.gamma_multiply(0.6);
    visuals.widgets.active.weak_bg_fill = colors::ACCENT.gamma_multiply(0.6);
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);
    ctx.set_visuals(visuals);
}

/// Frame for the drop zone; the stroke lights up while files hover over
/// the window.
pub fn drop_zone_frame(active: bool) -> egui::Frame {
    let stroke = if active {
        egui::Stroke::new(2.0, colors::ACCENT)
    } else {
        egui::Stroke::new(1.0, colors::BG_LIGHT)
    };
    egui::Frame::NONE
        .fill(colors::BG_DARK)
        .stroke(stroke)
        .corner_radius(4.0)
        .inner_margin(egui::Margin::same(8))
}
