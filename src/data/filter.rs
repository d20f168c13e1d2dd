use thiserror::Error;

use super::model::UploadedTable;
use super::schema::{FeatureRow, FEATURE_COLUMNS};
use crate::model::PredictError;

// ---------------------------------------------------------------------------
// Schema check: all seven feature columns must be present
// ---------------------------------------------------------------------------

/// The uploaded table lacks one or more feature columns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("CSV file does not contain all required columns. Missing: {missing:?}")]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// Resolve the position of every feature column. Extra columns are ignored.
pub fn feature_indices(table: &UploadedTable) -> Result<[usize; 7], SchemaError> {
    let mut indices = [0usize; 7];
    let mut missing = Vec::new();
    for (slot, name) in indices.iter_mut().zip(FEATURE_COLUMNS) {
        match table.column_index(name) {
            Some(idx) => *slot = idx,
            None => missing.push(name.to_string()),
        }
    }
    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(SchemaError { missing })
    }
}

// ---------------------------------------------------------------------------
// Column selection: table → feature rows
// ---------------------------------------------------------------------------

/// Select the feature columns of every row, in schema order.
///
/// A cell that is not a number (text, bool, empty) fails the whole batch.
pub fn feature_rows(
    table: &UploadedTable,
    indices: &[usize; 7],
) -> Result<Vec<FeatureRow>, PredictError> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| {
            let mut values = [0.0; 7];
            for ((value, &idx), name) in values.iter_mut().zip(indices).zip(FEATURE_COLUMNS) {
                let cell = &row[idx];
                *value = cell.as_f64().ok_or_else(|| PredictError::NonNumeric {
                    row: row_no,
                    column: name.to_string(),
                    value: cell.to_string(),
                })?;
            }
            Ok(FeatureRow::from_array(values))
        })
        .collect()
}
