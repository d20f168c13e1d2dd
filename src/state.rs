use std::path::Path;

use crate::config::AppConfig;
use crate::data::counts::LabelCounts;
use crate::form::ManualInput;
use crate::model::cache::shared_model;
use crate::model::{ModelError, PredictionLabel, Predictor};
use crate::pipeline::{self, BatchResult, UploadError};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Outcome of the last manual submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ManualResult {
    Label(PredictionLabel),
    Failed(String),
}

/// What the main area shows for the upload path.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    /// Nothing uploaded yet.
    Empty,
    /// Schema check failed; no prediction was attempted.
    Rejected(String),
    /// Reading the file or running the predictor failed.
    Failed(String),
    Predicted(BatchResult),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Sidebar widget values.
    pub manual: ManualInput,

    /// Last "Predict" press together with the form values it was made for.
    last_manual: Option<(ManualInput, ManualResult)>,

    pub upload: UploadState,

    /// File name of the last upload, for the top bar.
    pub source_name: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            manual: ManualInput::default(),
            last_manual: None,
            upload: UploadState::Empty,
            source_name: None,
        }
    }

    fn predictor(&self) -> Result<&'static dyn Predictor, ModelError> {
        let model = shared_model(&self.config.model_path)?;
        Ok(model)
    }

    /// Handle the sidebar "Predict" button with the cached model.
    pub fn submit_manual(&mut self) {
        match self.predictor() {
            Ok(predictor) => self.submit_manual_with(predictor),
            Err(e) => {
                log::error!("Model unavailable: {e}");
                self.last_manual = Some((
                    self.manual.clone(),
                    ManualResult::Failed(e.to_string()),
                ));
            }
        }
    }

    pub fn submit_manual_with(&mut self, predictor: &dyn Predictor) {
        let result = match pipeline::predict_manual(&self.manual, predictor) {
            Ok(label) => ManualResult::Label(label),
            Err(e) => {
                log::error!("Manual prediction failed: {e}");
                ManualResult::Failed(e.to_string())
            }
        };
        self.last_manual = Some((self.manual.clone(), result));
    }

    /// Drop the shown result after a sidebar widget changed.
    pub fn manual_edited(&mut self) {
        self.last_manual = None;
    }

    /// Outcome of the last submission, hidden once any sidebar value has
    /// changed since the press.
    pub fn manual_result(&self) -> Option<&ManualResult> {
        match &self.last_manual {
            Some((input, result)) if *input == self.manual => Some(result),
            _ => None,
        }
    }

    /// Handle a picked CSV file with the cached model.
    pub fn upload_file(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match self.predictor() {
            Ok(predictor) => {
                let outcome = pipeline::predict_file(path, predictor);
                self.ingest_upload(name, outcome);
            }
            Err(e) => {
                log::error!("Model unavailable: {e}");
                self.source_name = Some(name);
                self.upload = UploadState::Failed(e.to_string());
            }
        }
    }

    /// Record the outcome of an upload, replacing whatever was shown before.
    pub fn ingest_upload(&mut self, name: String, outcome: Result<BatchResult, UploadError>) {
        self.upload = match outcome {
            Ok(result) => {
                log::info!("Labelled {} rows from {name}", result.table.len());
                UploadState::Predicted(result)
            }
            Err(UploadError::Schema(e)) => UploadState::Rejected(e.to_string()),
            Err(e) => {
                log::error!("Upload of {name} failed: {e}");
                UploadState::Failed(e.to_string())
            }
        };
        self.source_name = Some(name);
    }

    /// Label distribution, present only after a successful upload.
    pub fn counts(&self) -> Option<&LabelCounts> {
        match &self.upload {
            UploadState::Predicted(result) => Some(&result.counts),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::{Fixed, HumidityRule};

    const HEADER: &str = "pressure,dewpoint,humidity ,cloud ,sunshine,         winddirection,windspeed";

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn starts_with_nothing_uploaded() {
        let state = state();
        assert_eq!(state.upload, UploadState::Empty);
        assert!(state.counts().is_none());
        assert!(state.manual_result().is_none());
    }

    #[test]
    fn manual_submission_records_label() {
        let mut state = state();
        state.manual.humidity = 95;
        state.submit_manual_with(&HumidityRule::default());
        assert_eq!(
            state.manual_result(),
            Some(&ManualResult::Label(PredictionLabel::Rain))
        );
    }

    #[test]
    fn editing_the_form_hides_the_previous_label() {
        let mut state = state();
        state.manual.humidity = 95;
        state.submit_manual_with(&HumidityRule::default());
        assert!(state.manual_result().is_some());

        state.manual.humidity = 10;
        assert_eq!(state.manual_result(), None);

        state.manual_edited();
        state.manual.humidity = 95;
        assert_eq!(state.manual_result(), None);

        state.submit_manual_with(&HumidityRule::default());
        assert_eq!(
            state.manual_result(),
            Some(&ManualResult::Label(PredictionLabel::Rain))
        );
    }

    #[test]
    fn manual_failure_is_reported_not_fatal() {
        let mut state = state();
        state.submit_manual_with(&Fixed(vec![]));
        assert!(matches!(state.manual_result(), Some(ManualResult::Failed(_))));
    }

    #[test]
    fn rejected_upload_has_no_chart() {
        let mut state = state();
        let predictor = HumidityRule::default();
        let outcome = pipeline::predict_csv("pressure,dewpoint\n1010,10\n".as_bytes(), &predictor);
        state.ingest_upload("partial.csv".into(), outcome);
        assert!(matches!(state.upload, UploadState::Rejected(_)));
        assert!(state.counts().is_none());
        assert_eq!(state.source_name.as_deref(), Some("partial.csv"));
    }

    #[test]
    fn successful_upload_feeds_chart() {
        let mut state = state();
        let csv = format!("{HEADER}\n1010,10,50,40,6,180,10\n1000,15,85,90,1,200,20\n1015,8,40,20,9,90,5\n");
        let outcome = pipeline::predict_csv(csv.as_bytes(), &HumidityRule::default());
        state.ingest_upload("weather.csv".into(), outcome);
        let counts = state.counts().unwrap();
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.count_of("Rain"), 1);
    }

    #[test]
    fn failed_upload_replaces_previous_result() {
        let mut state = state();
        let csv = format!("{HEADER}\n1010,10,50,40,6,180,10\n");
        let ok = pipeline::predict_csv(csv.as_bytes(), &HumidityRule::default());
        state.ingest_upload("a.csv".into(), ok);
        assert!(state.counts().is_some());

        let bad = pipeline::predict_csv(csv.as_bytes(), &Fixed(vec![]));
        state.ingest_upload("a.csv".into(), bad);
        assert!(matches!(state.upload, UploadState::Failed(_)));
        assert!(state.counts().is_none());
    }

    #[test]
    fn missing_model_fails_manual_submission() {
        let mut state = AppState::new(AppConfig {
            model_path: "/nonexistent/rain_model.json".into(),
            ..AppConfig::default()
        });
        state.submit_manual();
        assert!(matches!(state.manual_result(), Some(ManualResult::Failed(_))));
    }
}
