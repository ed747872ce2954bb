//! Configuration for the screening session.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the model artifact path
pub const MODEL_PATH_VAR: &str = "DIABETES_MODEL_PATH";
/// Environment variable overriding the scaler artifact path
pub const SCALER_PATH_VAR: &str = "DIABETES_SCALER_PATH";

/// Configuration for a screening session
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Path to the serialized classifier artifact
    pub model_path: PathBuf,
    /// Path to the serialized scaler artifact
    pub scaler_path: PathBuf,
    /// Number of history entries shown by displays
    pub display_limit: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("best_diabetes_model.json"),
            scaler_path: PathBuf::from("scaler.json"),
            display_limit: crate::models::history::DISPLAY_LIMIT,
        }
    }
}

impl ScreenConfig {
    /// Default configuration with the artifact paths overridable from the
    /// environment
    ///
    /// `DIABETES_MODEL_PATH` and `DIABETES_SCALER_PATH` are the only
    /// environment variables the crate reads.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var(MODEL_PATH_VAR) {
            config.model_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var(SCALER_PATH_VAR) {
            config.scaler_path = PathBuf::from(path);
        }
        config
    }

    /// Replace the model artifact path
    #[must_use]
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    /// Replace the scaler artifact path
    #[must_use]
    pub fn with_scaler_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scaler_path = path.into();
        self
    }
}
