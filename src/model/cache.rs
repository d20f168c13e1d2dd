use std::path::Path;

use once_cell::sync::OnceCell;

use super::logistic::{LogisticModel, ModelError};

/// Load-once slot for the model artifact. A failed load leaves the slot empty
/// so the next request tries again; a successful load is never invalidated.
#[derive(Default)]
pub struct ModelCell {
    cell: OnceCell<LogisticModel>,
}

impl ModelCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_load(&self, path: &Path) -> Result<&LogisticModel, ModelError> {
        self.cell.get_or_try_init(|| {
            let model = LogisticModel::load(path)?;
            log::info!(
                "Loaded model from {} (threshold {})",
                path.display(),
                model.threshold
            );
            Ok(model)
        })
    }
}

static SHARED: ModelCell = ModelCell::new();

/// Process-wide model handle. Only the first successful load reads `path`.
pub fn shared_model(path: &Path) -> Result<&'static LogisticModel, ModelError> {
    SHARED.get_or_load(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;
    use crate::data::schema::FEATURE_COLUMNS;

    fn write_model(bias: f64) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let value = json!({
            "feature_names": FEATURE_COLUMNS,
            "weights": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            "bias": bias
        });
        write!(file, "{value}").unwrap();
        file
    }

    #[test]
    fn loads_once_and_ignores_later_paths() {
        let cell = ModelCell::new();
        let first = write_model(1.0);
        let second = write_model(-1.0);

        let a = cell.get_or_load(first.path()).unwrap();
        let b = cell.get_or_load(second.path()).unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(b.bias, 1.0);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cell = ModelCell::new();
        assert!(cell.get_or_load(Path::new("/missing/rain_model.json")).is_err());
        assert!(cell.cell.get().is_none());

        let file = write_model(0.0);
        assert!(cell.get_or_load(file.path()).is_ok());
        assert!(cell.cell.get().is_some());
    }
}
