//! Deck screen: the swipeable card, decision buttons and progress counter

use super::App;
use crate::constants::{CARD_TRANSITION_SECS, SWIPE_THRESHOLD};
use crate::controller::SwipeEvent;
use crate::theme;
use crate::types::{CardLoad, Direction};
use crate::ui::components::{
    card_rect, card_rotation, decision_button, fit_size, loading_label, progress_label,
    rotated_corners,
};
use eframe::egui;
use egui_extras::{Size, StripBuilder};

impl App {
    pub fn render_header(&self, ui: &mut egui::Ui) {
        let icon = if self.controller.deck().is_finished() {
            egui_phosphor::regular::PAW_PRINT
        } else {
            egui_phosphor::regular::CAT
        };
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XL);
            ui.label(
                egui::RichText::new(format!("{}  {}  {}", icon, self.title(), icon))
                    .size(theme::FONT_TITLE)
                    .color(theme::TEXT_PRIMARY)
                    .strong(),
            );
        });
    }

    pub fn render_deck(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        StripBuilder::new(ui)
            .size(Size::remainder().at_least(theme::CARD_SIZE.1 * 0.5))
            .size(Size::exact(theme::FOOTER_HEIGHT))
            .vertical(|mut strip| {
                strip.cell(|ui| self.render_card_area(ui, ctx));
                strip.cell(|ui| self.render_controls(ui));
            });
    }

    fn render_card_area(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let area = ui.available_rect_before_wrap();
        let response = ui.interact(area, ui.id().with("card_wrapper"), egui::Sense::drag());

        if self.controller.deck().is_loading() {
            ui.painter().text(
                area.center(),
                egui::Align2::CENTER_CENTER,
                "Loading cute cats...",
                egui::FontId::proportional(theme::FONT_HEADING),
                theme::TEXT_MUTED,
            );
            return;
        }

        self.handle_card_input(ctx, &response);
        if response.dragged() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Grab);
        }

        let deck = self.controller.deck();
        let Some(card) = deck.current() else {
            return;
        };
        let url = card.url().to_string();
        let token = deck.token();
        let gesture = self.controller.gesture();

        // Eased while settling or snapping back, raw while following the pointer
        let anim_id = egui::Id::new(("card_offset", token.generation, token.position));
        let offset = if gesture.animate() {
            ctx.animate_value_with_time(anim_id, gesture.offset(), CARD_TRANSITION_SECS)
        } else {
            ctx.animate_value_with_time(anim_id, gesture.offset(), 0.0);
            gesture.offset()
        };
        let angle = card_rotation(offset);

        let max_card = egui::vec2(theme::CARD_SIZE.0, theme::CARD_SIZE.1);
        let card_size = fit_size(max_card, area.shrink(theme::SPACING_XL).size());
        let rect = card_rect(area, card_size, offset);

        let painter = ui.painter_at(area);
        painter.add(egui::Shape::convex_polygon(
            rotated_corners(rect, angle).to_vec(),
            theme::BG_CARD,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
        ));

        let loaded = self.controller.card_load() == CardLoad::Loaded;
        match self.texture_for(&url) {
            Some(tex) if loaded => {
                let bounds = rect.shrink(theme::CARD_PADDING);
                let size = fit_size(tex.size_vec2(), bounds.size());
                // centered in the card, so rotating about its own center matches the card
                let img_rect = egui::Rect::from_center_size(bounds.center(), size);
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(tex))
                    .rotate(angle, egui::Vec2::splat(0.5))
                    .paint_at(ui, img_rect);
            }
            _ => {
                let msg = loading_label(self.image_progress(&url));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    msg,
                    egui::FontId::proportional(theme::FONT_BODY),
                    theme::TEXT_ON_CARD,
                );
            }
        }

        if offset.abs() > 1.0 {
            painter.add(egui::Shape::convex_polygon(
                rotated_corners(rect, angle).to_vec(),
                theme::decision_tint(offset, SWIPE_THRESHOLD),
                egui::Stroke::NONE,
            ));
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.controller.deck().is_loading();
        let size = theme::DECISION_BUTTON_SIZE;

        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_MD);
            let row_width = size * 2.0 + theme::SPACING_XL * 2.0;
            ui.allocate_ui(egui::vec2(row_width, size), |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_XL * 2.0;
                    ui.add_enabled_ui(enabled, |ui| {
                        if decision_button(ui, egui_phosphor::regular::X, theme::REJECT, size).clicked() {
                            self.push_event(SwipeEvent::Decide(Direction::Left));
                        }
                        if decision_button(ui, egui_phosphor::regular::HEART, theme::LIKE, size).clicked() {
                            self.push_event(SwipeEvent::Decide(Direction::Right));
                        }
                    });
                });
            });

            ui.add_space(theme::SPACING_SM);
            let deck = self.controller.deck();
            if !deck.is_loading() {
                ui.label(
                    egui::RichText::new(progress_label(deck.position(), deck.len()))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
            }
        });
    }
}
