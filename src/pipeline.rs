//! Interaction handlers. Each takes the current form or upload input plus a
//! predictor and returns the outcome the UI renders; none of them touch the UI.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::data::counts::LabelCounts;
use crate::data::filter::{feature_indices, feature_rows, SchemaError};
use crate::data::loader;
use crate::data::model::{CellValue, TableError, UploadedTable};
use crate::data::schema::PREDICTION_COLUMN;
use crate::form::ManualInput;
use crate::model::{predict_labels, PredictError, PredictionLabel, Predictor};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("could not read CSV: {0:#}")]
    Read(anyhow::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("prediction failed: {0}")]
    Predict(#[from] PredictError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// A successful batch run: the uploaded table with its `Prediction` column
/// and the label distribution for the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub table: UploadedTable,
    pub labels: Vec<PredictionLabel>,
    pub counts: LabelCounts,
}

/// Predict one row assembled from the sidebar form.
pub fn predict_manual(
    input: &ManualInput,
    predictor: &dyn Predictor,
) -> Result<PredictionLabel, PredictError> {
    let row = input.to_feature_row();
    let labels = predict_labels(predictor, &[row])?;
    let label = labels[0];
    log::debug!("Manual prediction for {row:?}: {label}");
    Ok(label)
}

/// Validate, predict and label an uploaded table.
///
/// The predictor is called once for the whole table, and only when every
/// feature column is present.
pub fn predict_table(
    mut table: UploadedTable,
    predictor: &dyn Predictor,
) -> Result<BatchResult, UploadError> {
    let indices = feature_indices(&table).inspect_err(|e| {
        log::warn!("Rejected upload: missing columns {:?}", e.missing);
    })?;
    let rows = feature_rows(&table, &indices)?;
    let labels = predict_labels(predictor, &rows)?;

    let cells = labels
        .iter()
        .map(|l| CellValue::Text(l.as_str().to_string()))
        .collect();
    table.set_column(PREDICTION_COLUMN, cells)?;

    let counts = table
        .column(PREDICTION_COLUMN)
        .map(|values| LabelCounts::from_column(values))
        .unwrap_or_default();
    log::info!("Predicted {} rows: {:?}", table.len(), counts.entries());
    Ok(BatchResult {
        table,
        labels,
        counts,
    })
}

/// Parse a CSV stream and run [`predict_table`] on it.
pub fn predict_csv<R: Read>(
    source: R,
    predictor: &dyn Predictor,
) -> Result<BatchResult, UploadError> {
    let table = loader::read_csv(source).map_err(UploadError::Read)?;
    predict_table(table, predictor)
}

/// Load a CSV from disk and run [`predict_table`] on it.
pub fn predict_file(path: &Path, predictor: &dyn Predictor) -> Result<BatchResult, UploadError> {
    let table = loader::load_csv(path).map_err(UploadError::Read)?;
    predict_table(table, predictor)
}
