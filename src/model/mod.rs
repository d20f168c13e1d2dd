//! Predictor seam: everything outside this module sees the classifier only
//! through [`Predictor`].

pub mod cache;
pub mod logistic;

use std::fmt;

use thiserror::Error;

use crate::data::schema::FeatureRow;

pub use logistic::ModelError;

/// A binary classifier over feature rows.
pub trait Predictor {
    /// Classify every row, returning one `0`/`1` per row in input order.
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<u8>, PredictError>;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictError {
    #[error("row {row}: column '{column}' is not numeric (got '{value}')")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },
    #[error("predictor returned {actual} predictions for {expected} rows")]
    OutputLength { expected: usize, actual: usize },
    #[error("row {row}: feature {feature} is not finite")]
    NonFinite { row: usize, feature: usize },
}

// ---------------------------------------------------------------------------
// PredictionLabel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionLabel {
    Rain,
    NoRain,
}

impl PredictionLabel {
    /// Class `1` is rain; every other class value is no rain.
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            PredictionLabel::Rain
        } else {
            PredictionLabel::NoRain
        }
    }

    /// Value written into the `Prediction` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionLabel::Rain => "Rain",
            PredictionLabel::NoRain => "No Rain",
        }
    }

    /// Sentence shown after a manual prediction.
    pub fn headline(&self) -> &'static str {
        match self {
            PredictionLabel::Rain => "Rain Expected",
            PredictionLabel::NoRain => "No Rain",
        }
    }
}

impl fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run the predictor and map its classes to labels, checking that every row
/// got exactly one prediction.
pub fn predict_labels(
    predictor: &dyn Predictor,
    rows: &[FeatureRow],
) -> Result<Vec<PredictionLabel>, PredictError> {
    let classes = predictor.predict(rows)?;
    if classes.len() != rows.len() {
        return Err(PredictError::OutputLength {
            expected: rows.len(),
            actual: classes.len(),
        });
    }
    Ok(classes.into_iter().map(PredictionLabel::from_class).collect())
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Deterministic stand-in: rain when humidity is above 70%. Records every
    /// call so tests can assert on batch behaviour.
    #[derive(Default)]
    pub struct HumidityRule {
        pub calls: Cell<usize>,
        pub batch_sizes: RefCell<Vec<usize>>,
    }

    impl Predictor for HumidityRule {
        fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<u8>, PredictError> {
            self.calls.set(self.calls.get() + 1);
            self.batch_sizes.borrow_mut().push(rows.len());
            Ok(rows.iter().map(|r| u8::from(r.humidity > 70.0)).collect())
        }
    }

    /// Returns a fixed class vector regardless of input.
    pub struct Fixed(pub Vec<u8>);

    impl Predictor for Fixed {
        fn predict(&self, _rows: &[FeatureRow]) -> Result<Vec<u8>, PredictError> {
            Ok(self.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Fixed;
    use super::*;

    fn row() -> FeatureRow {
        FeatureRow::from_array([1010.0, 10.0, 50.0, 40.0, 6.0, 180.0, 10.0])
    }

    #[test]
    fn class_one_is_rain() {
        assert_eq!(PredictionLabel::from_class(1), PredictionLabel::Rain);
        assert_eq!(PredictionLabel::from_class(0), PredictionLabel::NoRain);
        assert_eq!(PredictionLabel::from_class(2), PredictionLabel::NoRain);
    }

    #[test]
    fn label_strings() {
        assert_eq!(PredictionLabel::Rain.to_string(), "Rain");
        assert_eq!(PredictionLabel::NoRain.to_string(), "No Rain");
        assert_eq!(PredictionLabel::Rain.headline(), "Rain Expected");
    }

    #[test]
    fn output_length_is_checked() {
        let err = predict_labels(&Fixed(vec![1, 0]), &[row()]).unwrap_err();
        assert_eq!(
            err,
            PredictError::OutputLength {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn classes_map_elementwise() {
        let labels = predict_labels(&Fixed(vec![0, 1, 1]), &[row(), row(), row()]).unwrap();
        assert_eq!(
            labels,
            vec![
                PredictionLabel::NoRain,
                PredictionLabel::Rain,
                PredictionLabel::Rain
            ]
        );
    }
}
