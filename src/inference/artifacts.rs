//! Artifact loading
//!
//! Loads the serialized scaler and classifier files, checks them
//! structurally, and cross-checks their shapes against each other and the
//! input record. Loading happens once; the resulting engine is reused for
//! every prediction in the session.

use std::fs;
use std::path::Path;

use crate::config::ScreenConfig;
use crate::error::ArtifactError;
use crate::inference::engine::PredictionEngine;
use crate::inference::forest::RandomForestModel;
use crate::inference::scaler::StandardScaler;
use crate::models::patient::FIELD_COUNT;

/// Read an artifact file to a string with rich path errors
fn read_artifact(path: &Path) -> Result<String, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Structural checks on a deserialized scaler
fn check_scaler(scaler: &StandardScaler) -> Result<(), String> {
    if scaler.is_empty() {
        return Err("scaler has no features".to_string());
    }
    if scaler.mean.len() != scaler.scale.len() {
        return Err(format!(
            "mean has {} entries but scale has {}",
            scaler.mean.len(),
            scaler.scale.len()
        ));
    }
    for (index, value) in scaler.scale.iter().enumerate() {
        if !value.is_finite() || *value == 0.0 {
            return Err(format!(
                "scale entry {index} is {value}, must be finite and non-zero"
            ));
        }
    }
    Ok(())
}

/// Load and check the scaler artifact
pub fn load_scaler(path: &Path) -> Result<StandardScaler, ArtifactError> {
    let content = read_artifact(path)?;
    let scaler: StandardScaler =
        serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    check_scaler(&scaler).map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;

    log::info!(
        "Loaded scaler for {} features from {}",
        scaler.len(),
        path.display()
    );
    Ok(scaler)
}

/// Load and check the classifier artifact
pub fn load_model(path: &Path) -> Result<RandomForestModel, ArtifactError> {
    let content = read_artifact(path)?;
    let model: RandomForestModel =
        serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    model.validate().map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;

    log::info!(
        "Loaded model '{}' with {} trees from {}",
        model.model_name,
        model.n_trees(),
        path.display()
    );
    Ok(model)
}

/// Both prediction artifacts, loaded and cross-checked
#[derive(Debug, Clone)]
pub struct PredictionArtifacts {
    /// Fitted input scaler
    pub scaler: StandardScaler,
    /// Fitted classifier
    pub model: RandomForestModel,
}

impl PredictionArtifacts {
    /// Load both artifact files named by the configuration
    ///
    /// Fails if either file is missing, unreadable, unparseable, or
    /// structurally unusable, or if the two artifacts disagree about the
    /// feature count. The model is loaded before the scaler, so a missing
    /// model is always the first error reported.
    pub fn load(config: &ScreenConfig) -> Result<Self, ArtifactError> {
        let model = load_model(&config.model_path)?;
        let scaler = load_scaler(&config.scaler_path)?;

        if model.n_features != FIELD_COUNT {
            return Err(ArtifactError::Invalid {
                path: config.model_path.clone(),
                reason: format!(
                    "model was fit on {} features, the input record has {FIELD_COUNT}",
                    model.n_features
                ),
            });
        }
        if scaler.len() != model.n_features {
            return Err(ArtifactError::Invalid {
                path: config.scaler_path.clone(),
                reason: format!(
                    "scaler was fit on {} features but the model expects {}",
                    scaler.len(),
                    model.n_features
                ),
            });
        }

        Ok(Self { scaler, model })
    }

    /// Build a reusable prediction engine from the loaded pair
    #[must_use]
    pub fn into_engine(self) -> PredictionEngine {
        PredictionEngine::new(self.scaler, Box::new(self.model))
    }
}
