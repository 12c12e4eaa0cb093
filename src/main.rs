mod app;
mod config;
mod entry;
mod error;
mod input;
mod io;
mod logging;
mod message;
mod platform;
mod state;
mod style;
mod view;

use app::Explorer;
use config::Config;
use eframe::egui;
use platform::NativePlatform;

fn main() -> eframe::Result<()> {
    logging::init_logging();

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Trailhead"),
        ..Default::default()
    };

    eframe::run_native(
        "Trailhead",
        options,
        Box::new(move |_cc| Ok(Box::new(Explorer::new(NativePlatform, &config)))),
    )
}
