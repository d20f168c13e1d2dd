mod app;
mod color;
mod config;
mod data;
mod form;
mod model;
mod pipeline;
mod state;
mod ui;

use anyhow::Context;
use app::RainfallApp;
use config::AppConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().context("reading configuration")?;
    log::info!("Using model artifact {}", config.model_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rainfall Prediction",
        options,
        Box::new(|_cc| Ok(Box::new(RainfallApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
