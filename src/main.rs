// Timeline demo application
// Main entry point

use std::path::PathBuf;

use egui_timeline::services::config::TimelineConfig;
use egui_timeline::ui_egui::TimelineDemoApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting timeline demo");

    // Optional config path as the first argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = TimelineConfig::load_or_default(config_path.as_deref());
    let save_path = config_path.or_else(TimelineConfig::default_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 380.0])
            .with_min_inner_size([480.0, 260.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Timeline Demo",
        options,
        Box::new(move |cc| Ok(Box::new(TimelineDemoApp::new(cc, config, save_path)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe error: {err}"))
}
