//! Color palette and theme setup for the viewer.
//!
//! Dark, low-contrast background tiers with a single blue accent. Everything
//! that paints a panel or card should pull from here rather than hard-coding
//! colors inline.

use eframe::egui::{self, Color32, CornerRadius, Margin, Stroke};

// Background tiers, darkest to lightest
pub const BG_DARK: Color32 = Color32::from_rgb(16, 18, 24);
pub const BG_MID: Color32 = Color32::from_rgb(24, 27, 35);
pub const BG_LIGHT: Color32 = Color32::from_rgb(38, 42, 54);
pub const BG_HOVER: Color32 = Color32::from_rgb(46, 51, 65);

// Accent
pub const ACCENT: Color32 = Color32::from_rgb(92, 156, 255);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(58, 98, 164);
pub const SELECTION_BG: Color32 = Color32::from_rgb(36, 48, 72);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 233, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(180, 188, 202);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(127, 139, 160);

// Status
pub const SUCCESS: Color32 = Color32::from_rgb(63, 182, 139);
pub const WARNING: Color32 = Color32::from_rgb(247, 200, 67);
pub const ERROR: Color32 = Color32::from_rgb(240, 99, 92);
pub const INFO: Color32 = Color32::from_rgb(92, 176, 255);

// Buttons
pub const BUTTON_BG: Color32 = Color32::from_rgb(42, 47, 60);
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(54, 60, 76);
pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(48, 64, 96);

/// Install the phosphor icon font and apply the dark palette to the context.
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_MID;
    visuals.window_fill = BG_DARK;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_LIGHT;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.selection.bg_fill = SELECTION_BG;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.widgets.inactive.bg_fill = BUTTON_BG;
    visuals.widgets.inactive.weak_bg_fill = BUTTON_BG;
    visuals.widgets.inactive.corner_radius = CornerRadius::same(4);
    visuals.widgets.hovered.bg_fill = BUTTON_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BUTTON_HOVER;
    visuals.widgets.hovered.corner_radius = CornerRadius::same(4);
    visuals.widgets.active.bg_fill = BUTTON_ACTIVE;
    visuals.widgets.active.weak_bg_fill = BUTTON_ACTIVE;
    visuals.widgets.active.corner_radius = CornerRadius::same(4);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BG_LIGHT);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);

    ctx.set_visuals(visuals);
}

/// Card container used for list rows, feature cards, and endpoint cards.
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_LIGHT)
        .corner_radius(6)
        .inner_margin(Margin::same(10))
        .stroke(Stroke::new(1.0, BG_HOVER))
}

/// Container for code listings.
pub fn code_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_DARK)
        .corner_radius(4)
        .inner_margin(Margin::same(10))
        .stroke(Stroke::new(1.0, BG_LIGHT))
}
