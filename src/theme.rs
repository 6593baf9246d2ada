//! Centralized theme constants for Paws & Preferences
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x1c, 0x19, 0x17); // stone-900
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x29, 0x25, 0x24); // stone-800
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x44, 0x40, 0x3c); // stone-700
pub const BG_CARD: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xf9); // stone-50

// =============================================================================
// COLORS - Accent (Rose)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xfb, 0x71, 0x85); // rose-400
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x4c, 0x05, 0x19); // rose-950, text on accent

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe7, 0xe5, 0xe4); // stone-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa8, 0xa2, 0x9e); // stone-400
pub const TEXT_ON_CARD: Color32 = Color32::from_rgb(0x78, 0x71, 0x6c); // stone-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x44, 0x40, 0x3c); // stone-700
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x57, 0x53, 0x4e); // stone-600

// =============================================================================
// COLORS - Decisions
// =============================================================================
pub const LIKE: Color32 = Color32::from_rgb(0xf4, 0x3f, 0x5e); // rose-500
pub const REJECT: Color32 = Color32::from_rgb(0xa8, 0xa2, 0x9e); // stone-400

/// Tint laid over the card while it is dragged towards a decision
pub fn decision_tint(offset: f32, threshold: f32) -> Color32 {
    let strength = (offset.abs() / threshold).min(1.0);
    let alpha = (strength * 40.0) as u8;
    let base = if offset >= 0.0 { LIKE } else { REJECT };
    Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha)
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 24.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const HEADER_HEIGHT: f32 = 64.0;
pub const FOOTER_HEIGHT: f32 = 110.0;
pub const CARD_SIZE: (f32, f32) = (320.0, 400.0);
pub const CARD_PADDING: f32 = 10.0;
pub const DECISION_BUTTON_SIZE: f32 = 56.0;
pub const LIKED_THUMB_SIZE: f32 = 140.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x57, 0x53, 0x4e),
            stroke: egui::Stroke::NONE,
        },
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY);
        style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent rose button (for primary actions like Try Again)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_DARK).size(FONT_HEADING))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}
