use eframe::egui;

use crate::gui::theme::Theme;

/// Shown when a batch could not be fetched. Returns true when a retry was requested.
pub fn show_fetch_error(ctx: &egui::Context, theme: &Theme, message: &str) -> bool {
    let mut retry = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() / 2.0 - 120.0).max(0.0));
            ui.label(egui::RichText::new("⚠").size(48.0).color(theme.nope(ctx)));
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Couldn't fetch any cats").size(24.0).strong());
            ui.add_space(10.0);
            ui.label(theme.muted(ctx, message));
            ui.add_space(25.0);
            let button = egui::Button::new(
                egui::RichText::new("Try again").size(18.0).color(egui::Color32::WHITE).strong(),
            )
            .fill(theme.orange(ctx))
            .corner_radius(egui::CornerRadius::same(24))
            .min_size(egui::vec2(160.0, 44.0));

            if ui.add(button).clicked() {
                retry = true;
            }
        });
    });

    retry
}
