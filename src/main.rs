// Countdowns
// Main entry point

use countdowns::models::settings::AppConfig;
use countdowns::services::countdown::CountdownStore;
use countdowns::services::preferences::{open_preferences, MemoryPreferences};
use countdowns::ui_egui::CountdownApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Countdowns");

    let config = AppConfig::load();
    let preferences = open_preferences(&config).unwrap_or_else(|err| {
        log::warn!("Falling back to in-memory preferences: {err:#}");
        Box::new(MemoryPreferences::new())
    });
    let store = CountdownStore::new(preferences);
    let refresh_interval = config.refresh_interval();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Countdowns")
            .with_inner_size([420.0, 560.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Countdowns",
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, store, refresh_interval)))),
    )
}
