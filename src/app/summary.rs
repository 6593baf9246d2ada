//! Summary screen shown once every cat has been judged

use super::App;
use crate::controller::SwipeEvent;
use crate::theme;
use crate::ui::components::{fit_size, summary_line};
use eframe::egui;

impl App {
    pub fn render_summary(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let liked: Vec<String> = self
            .controller
            .deck()
            .liked()
            .iter()
            .map(|c| c.url().to_string())
            .collect();
        let total = self.controller.deck().len();

        // cats liked before their image arrived still need fetching
        for url in &liked {
            self.ensure_image(ctx, url);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_LG);
            theme::section_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(summary_line(total, liked.len()))
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_SECONDARY),
                );
            });
            ui.add_space(theme::SPACING_LG);

            if liked.is_empty() {
                ui.label(
                    egui::RichText::new(format!(
                        "No cats were liked this time {}",
                        egui_phosphor::regular::SMILEY_SAD
                    ))
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
                );
            } else {
                ui.label(
                    egui::RichText::new("Cats You Liked:")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_PRIMARY),
                );
                ui.add_space(theme::SPACING_MD);

                let bottom_reserved = 64.0;
                egui::ScrollArea::vertical()
                    .max_height((ui.available_height() - bottom_reserved).max(theme::LIKED_THUMB_SIZE))
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);
                            for url in &liked {
                                self.render_liked_thumb(ui, url);
                            }
                        });
                    });
            }

            ui.add_space(theme::SPACING_XL);
            let label = format!("{}  Try Again", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE);
            if ui.add(theme::button_accent(label)).clicked() {
                self.push_event(SwipeEvent::Restart);
            }
        });
    }

    fn render_liked_thumb(&self, ui: &mut egui::Ui, url: &str) {
        let side = theme::LIKED_THUMB_SIZE;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_LARGE, theme::BG_ELEVATED);

        if let Some(tex) = self.texture_for(url) {
            let size = fit_size(tex.size_vec2(), rect.size());
            let img_rect = egui::Rect::from_center_size(rect.center(), size);
            egui::Image::from_texture(egui::load::SizedTexture::from_handle(tex))
                .corner_radius(theme::RADIUS_LARGE)
                .paint_at(ui, img_rect);
        } else {
            let icon = if self.image_failed(url) {
                egui_phosphor::regular::IMAGE_BROKEN
            } else {
                egui_phosphor::regular::HOURGLASS
            };
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(theme::FONT_TITLE),
                theme::TEXT_MUTED,
            );
        }
    }
}
