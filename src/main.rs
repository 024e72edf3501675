use eframe::egui;
use pawswipe::{
    core::tasks::TaskManager,
    gui::SwipeApp,
    settings::SwipeSettings,
    source::build_source,
};
use tracing::info;
use tracing_subscriber::{
    fmt,
    prelude::*,
    EnvFilter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pawswipe=info")))
        .init();

    let settings = SwipeSettings::load();
    let source = build_source(&settings)?;
    let task_manager = TaskManager::new()?;

    info!(
        batch_size = settings.batch_size,
        source = source.name(),
        base_url = %settings.base_url,
        "Starting Paws&Preference"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Paws&Preference")
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Paws&Preference",
        options,
        Box::new(move |cc| Ok(Box::new(SwipeApp::new(cc, settings, source, task_manager)))),
    )?;

    Ok(())
}
