//! Reusable UI components
//!
//! Card geometry, labels and the round decision buttons.

use crate::constants::ROTATION_DIVISOR;
use crate::theme;
use crate::utils::format_bytes;
use eframe::egui;

/// Card tilt for a horizontal offset, in radians (offset / 20 degrees)
pub fn card_rotation(offset: f32) -> f32 {
    (offset / ROTATION_DIVISOR).to_radians()
}

/// Card rect of `size` centered in `area`, shifted right by `offset`
pub fn card_rect(area: egui::Rect, size: egui::Vec2, offset: f32) -> egui::Rect {
    egui::Rect::from_center_size(area.center() + egui::vec2(offset, 0.0), size)
}

/// Corners of `rect` rotated by `angle` around its center, clockwise from top-left
pub fn rotated_corners(rect: egui::Rect, angle: f32) -> [egui::Pos2; 4] {
    let rot = egui::emath::Rot2::from_angle(angle);
    let c = rect.center();
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
    .map(|p| c + rot * (p - c))
}

/// Fit an image of `image` size inside `bounds`, preserving aspect ratio
pub fn fit_size(image: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y);
    image * scale
}

/// "Cat 3 / 12"
pub fn progress_label(position: usize, total: usize) -> String {
    format!("Cat {} / {}", position + 1, total)
}

/// Card placeholder text, with download progress once bytes arrive
pub fn loading_label(progress: Option<(u64, u64)>) -> String {
    match progress {
        Some((received, 0)) => format!("Loading cat... {}", format_bytes(received)),
        Some((received, total)) => format!(
            "Loading cat... {} / {}",
            format_bytes(received),
            format_bytes(total)
        ),
        None => "Loading cat...".to_string(),
    }
}

/// Summary headline for the finished deck
pub fn summary_line(total: usize, liked: usize) -> String {
    format!("Out of {} cats, you've liked {} of them!", total, liked)
}

/// Round icon button used for like / reject
pub fn decision_button(ui: &mut egui::Ui, icon: &str, color: egui::Color32, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let hovered = response.hovered();
        let radius = size / 2.0 - if response.is_pointer_button_down_on() { 2.0 } else { 0.0 };

        painter.circle_filled(
            rect.center(),
            radius,
            if hovered { theme::BG_SURFACE } else { theme::BG_ELEVATED },
        );
        painter.circle_stroke(
            rect.center(),
            radius,
            egui::Stroke::new(theme::STROKE_MEDIUM, if hovered { color } else { theme::BORDER_DEFAULT }),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.45),
            color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
