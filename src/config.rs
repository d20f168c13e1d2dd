use std::path::PathBuf;

use anyhow::{Context, Result};

pub const MODEL_PATH_VAR: &str = "RAINFALL_MODEL_PATH";
pub const WINDOW_WIDTH_VAR: &str = "RAINFALL_WINDOW_WIDTH";
pub const WINDOW_HEIGHT_VAR: &str = "RAINFALL_WINDOW_HEIGHT";

/// Startup settings, read once from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Model artifact loaded on first prediction.
    pub model_path: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("rain_model.json"),
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup(MODEL_PATH_VAR) {
            config.model_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(WINDOW_WIDTH_VAR) {
            config.window_width = parse_dimension(WINDOW_WIDTH_VAR, &raw)?;
        }
        if let Some(raw) = lookup(WINDOW_HEIGHT_VAR) {
            config.window_height = parse_dimension(WINDOW_HEIGHT_VAR, &raw)?;
        }
        Ok(config)
    }
}

fn parse_dimension(var: &str, raw: &str) -> Result<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .with_context(|| format!("{var}={raw:?} is not a number"))?;
    anyhow::ensure!(
        value.is_finite() && value > 0.0,
        "{var} must be a positive finite size, got {value}"
    );
    Ok(value)
}
