use eframe::egui::{
    self,
    Vec2,
};

use crate::{
    core::Card,
    gui::theme::Theme,
};

const THUMBNAIL_SIZE: f32 = 160.0;

pub fn summary_headline(liked: usize, total: usize) -> String {
    format!("You liked {} out of {} cats!", liked, total)
}

/// Results grid for a finished pass. Returns true when "Start Over" was clicked.
pub fn show_summary(ctx: &egui::Context, theme: &Theme, liked: &[Card], total: usize) -> bool {
    let mut restart = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(egui::RichText::new("🐾 Results").size(44.0).strong());
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(summary_headline(liked.len(), total))
                        .size(22.0)
                        .color(theme.orange(ctx)),
                );
                ui.add_space(24.0);
            });

            if liked.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(32.0);
                    ui.label(egui::RichText::new("😿").size(40.0));
                    ui.label(theme.muted(ctx, "You didn't like any cats!"));
                    ui.add_space(32.0);
                });
            } else {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::splat(16.0);
                    for card in liked {
                        ui.add(
                            egui::Image::new(card.image_url.as_str())
                                .fit_to_exact_size(Vec2::splat(THUMBNAIL_SIZE))
                                .maintain_aspect_ratio(false)
                                .corner_radius(egui::CornerRadius::same(16))
                                .alt_text("Liked cat"),
                        );
                    }
                });
                ui.add_space(24.0);
            }

            ui.vertical_centered(|ui| {
                let button = egui::Button::new(
                    egui::RichText::new("Start Over")
                        .size(20.0)
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(theme.pink(ctx))
                .corner_radius(egui::CornerRadius::same(28))
                .min_size(egui::vec2(200.0, 52.0));

                if ui.add(button).clicked() {
                    restart = true;
                }
                ui.add_space(24.0);
            });
        });
    });

    restart
}
