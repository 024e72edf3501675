use eframe::egui;

use crate::gui::theme::Theme;

const DEFAULT_MESSAGE: &str = "Loading cats...";

pub struct LoadingOverlay {
    pub message: Option<String>,
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        let message = self.message.as_deref().unwrap_or(DEFAULT_MESSAGE);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space((ui.available_height() / 2.0 - 60.0).max(0.0));
                ui.add(egui::Spinner::new().size(72.0).color(theme.orange(ctx)));
                ui.add_space(16.0);
                ui.label(egui::RichText::new(message).size(22.0).strong());
            });
        });
    }
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}
