use eframe::egui;

use crate::config::AppConfig;
use crate::model::cache::shared_model;
use crate::state::AppState;
use crate::ui::{charts, panels, preview};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RainfallApp {
    pub state: AppState,
}

impl RainfallApp {
    pub fn new(config: AppConfig) -> Self {
        // Warm the model cache so the first click does not pay for the load.
        if let Err(e) = shared_model(&config.model_path) {
            log::warn!("Model not loaded at startup: {e}");
        }
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for RainfallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: manual input ----
        egui::SidePanel::left("manual_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: upload, preview and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::upload_control(ui, &mut self.state);
            ui.separator();
            ui.columns(2, |cols| {
                preview::data_preview(&mut cols[0], &self.state);
                charts::chart_panel(&mut cols[1], &self.state);
            });
        });
    }
}
