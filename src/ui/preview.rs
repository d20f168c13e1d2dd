use eframe::egui::{self, Color32, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::UploadedTable;
use crate::state::{AppState, UploadState};

// ---------------------------------------------------------------------------
// Uploaded data preview (left half of the main area)
// ---------------------------------------------------------------------------

pub fn data_preview(ui: &mut Ui, state: &AppState) {
    ui.heading("Uploaded Data Preview");
    ui.separator();

    match &state.upload {
        UploadState::Empty => {
            ui.label("Upload a CSV with the 7 weather features to see predictions.");
        }
        UploadState::Rejected(msg) | UploadState::Failed(msg) => {
            ui.colored_label(Color32::RED, msg);
        }
        UploadState::Predicted(result) => table_view(ui, &result.table),
    }
}

fn table_view(ui: &mut Ui, table: &UploadedTable) {
    ui.label(format!("{} rows", table.len()));

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(60.0), table.columns.len())
            .header(20.0, |mut header| {
                for name in &table.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, table.len(), |mut row| {
                    let cells = &table.rows[row.index()];
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}
