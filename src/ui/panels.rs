use eframe::egui::{self, Color32, RichText, Ui};

use crate::form::{
    CLOUD_RANGE, DEWPOINT_RANGE, HUMIDITY_RANGE, PRESSURE_RANGE, SUNSHINE_RANGE,
    WIND_DIRECTION_RANGE, WIND_SPEED_RANGE,
};
use crate::state::{AppState, ManualResult};

// ---------------------------------------------------------------------------
// Left side panel – manual weather input
// ---------------------------------------------------------------------------

/// Render the manual input form.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Manual Weather Input");
    ui.separator();

    let input = &mut state.manual;

    ui.label("Pressure");
    let mut changed = ui
        .add(egui::DragValue::new(&mut input.pressure).range(PRESSURE_RANGE))
        .changed();

    ui.label("Dew Point");
    changed |= ui
        .add(egui::DragValue::new(&mut input.dewpoint).range(DEWPOINT_RANGE))
        .changed();

    ui.add_space(4.0);
    changed |= ui
        .add(egui::Slider::new(&mut input.humidity, HUMIDITY_RANGE).text("Humidity (%)"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut input.cloud, CLOUD_RANGE).text("Cloud (%)"))
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut input.sunshine, SUNSHINE_RANGE)
                .fixed_decimals(1)
                .text("Sunshine (hrs)"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut input.wind_direction, WIND_DIRECTION_RANGE)
                .text("Wind Direction (°)"),
        )
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut input.wind_speed, WIND_SPEED_RANGE).text("Wind Speed (km/h)"))
        .changed();

    if changed {
        state.manual_edited();
    }

    ui.add_space(8.0);
    if ui.button("Predict Manually").clicked() {
        state.submit_manual();
    }

    match state.manual_result() {
        Some(ManualResult::Label(label)) => {
            ui.label(
                RichText::new(format!("Prediction: {}", label.headline()))
                    .color(Color32::DARK_GREEN)
                    .strong(),
            );
        }
        Some(ManualResult::Failed(msg)) => {
            ui.colored_label(Color32::RED, format!("Error: {msg}"));
        }
        None => {}
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Upload CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong("Rainfall Prediction");

        if let Some(name) = &state.source_name {
            ui.separator();
            ui.label(format!("Last upload: {name}"));
        }
    });
}

/// Upload control at the top of the main area.
pub fn upload_control(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Upload CSV with 7 features").clicked() {
            open_file_dialog(state);
        }
        if let Some(name) = &state.source_name {
            ui.label(name);
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload weather CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Uploading {}", path.display());
        state.upload_file(&path);
    }
}
