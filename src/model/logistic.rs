use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PredictError, Predictor};
use crate::data::schema::{FeatureRow, FEATURE_COLUMNS};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("reading model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model features {found:?} do not match the expected columns {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("model field '{field}' has {actual} entries, expected 7")]
    Length { field: &'static str, actual: usize },
    #[error("scaler entry {index} is zero")]
    ZeroScale { index: usize },
}

/// Per-feature standardisation applied before the linear term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

fn default_threshold() -> f64 {
    0.5
}

/// Logistic-regression classifier serialized as JSON.
///
/// ```json
/// {
///   "feature_names": ["pressure", "dewpoint", "humidity ", ...],
///   "weights": [...7 floats...],
///   "bias": -0.3,
///   "scaler": { "mean": [...], "scale": [...] },
///   "threshold": 0.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
    pub bias: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<Scaler>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticModel {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let model: LogisticModel = serde_json::from_str(text)?;
        model.validate()?;
        Ok(model)
    }

    /// Feature names must equal the schema exactly, whitespace included.
    fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
                found: self.feature_names.clone(),
            });
        }
        if self.weights.len() != 7 {
            return Err(ModelError::Length {
                field: "weights",
                actual: self.weights.len(),
            });
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != 7 {
                return Err(ModelError::Length {
                    field: "scaler.mean",
                    actual: scaler.mean.len(),
                });
            }
            if scaler.scale.len() != 7 {
                return Err(ModelError::Length {
                    field: "scaler.scale",
                    actual: scaler.scale.len(),
                });
            }
            if let Some(index) = scaler.scale.iter().position(|s| *s == 0.0) {
                return Err(ModelError::ZeroScale { index });
            }
        }
        Ok(())
    }

    /// Probability of rain for one row.
    pub fn probability(&self, row: &FeatureRow) -> f64 {
        let x = row.to_array();
        let z = x
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let v = match &self.scaler {
                    Some(s) => (v - s.mean[i]) / s.scale[i],
                    None => *v,
                };
                v * self.weights[i]
            })
            .sum::<f64>()
            + self.bias;
        1.0 / ((-z).exp() + 1.0)
    }
}

impl Predictor for LogisticModel {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<u8>, PredictError> {
        rows.iter()
            .enumerate()
            .map(|(row, r)| {
                if let Some(feature) = r.to_array().iter().position(|v| !v.is_finite()) {
                    return Err(PredictError::NonFinite { row, feature });
                }
                Ok(u8::from(self.probability(r) >= self.threshold))
            })
            .collect()
    }
}
