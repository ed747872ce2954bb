//! Session context for the screening flow
//!
//! [`ScreenSession`] is the caller-owned per-session state: the loaded
//! prediction engine, or the recorded reason it could not be loaded, plus
//! the session's prediction history. A service hosting many users would own
//! one session per user identity; nothing here is shared or global.

use rustc_hash::FxHashMap;

use crate::config::ScreenConfig;
use crate::error::{ArtifactError, ScreenError};
use crate::inference::{PredictionArtifacts, PredictionEngine};
use crate::models::history::{HistoryEntry, PredictionHistory};
use crate::models::patient::PatientInput;

/// Caller-owned state for one screening session
///
/// Construction attempts the artifact load exactly once. When the load
/// fails the session is degraded: categorization and history stay fully
/// usable, and [`ScreenSession::submit`] fails with the recorded reason.
#[derive(Debug)]
pub struct ScreenSession {
    engine: Option<PredictionEngine>,
    disabled_reason: Option<String>,
    history: PredictionHistory,
}

impl ScreenSession {
    /// Open a session, loading the artifacts named by the configuration
    ///
    /// Never fails. An artifact load failure is logged and recorded, and
    /// the session comes up with prediction disabled.
    #[must_use]
    pub fn new(config: &ScreenConfig) -> Self {
        match PredictionArtifacts::load(config) {
            Ok(artifacts) => Self::with_engine(artifacts.into_engine()),
            Err(error) => {
                log::error!("Prediction disabled for this session: {error}");
                Self {
                    engine: None,
                    disabled_reason: Some(error.to_string()),
                    history: PredictionHistory::new(),
                }
            }
        }
    }

    /// Open a session around an already-built engine
    ///
    /// The substitution seam for alternative classifiers, including test
    /// doubles.
    #[must_use]
    pub fn with_engine(engine: PredictionEngine) -> Self {
        Self {
            engine: Some(engine),
            disabled_reason: None,
            history: PredictionHistory::new(),
        }
    }

    /// Whether this session can serve predictions
    #[must_use]
    pub fn prediction_enabled(&self) -> bool {
        self.engine.is_some()
    }

    /// The recorded load failure, when prediction is disabled
    #[must_use]
    pub fn disabled_reason(&self) -> Option<&str> {
        self.disabled_reason.as_deref()
    }

    /// Run one screening cycle: validate, predict, append to history
    ///
    /// The record is re-validated even though bounded entry controls cannot
    /// produce an out-of-range value, since records can also be built
    /// directly. Failed predictions are surfaced and never appended.
    pub fn submit(&mut self, input: PatientInput) -> Result<HistoryEntry, ScreenError> {
        input.validate()?;

        let engine = self.engine.as_ref().ok_or_else(|| {
            let reason = self
                .disabled_reason
                .clone()
                .unwrap_or_else(|| "no prediction engine".to_string());
            ArtifactError::Unavailable { reason }
        })?;

        let result = engine.predict(&input)?;
        let entry = HistoryEntry::new(input, result);
        self.history.append(entry);

        log::info!(
            "Recorded prediction {} ({:.1}% diabetic) for glucose {}",
            result.class(),
            result.diabetic() * 100.0,
            input.glucose
        );
        Ok(entry)
    }

    /// Gate a raw field map through the input builder, then submit it
    pub fn submit_fields(
        &mut self,
        fields: &FxHashMap<String, f64>,
    ) -> Result<HistoryEntry, ScreenError> {
        let input = PatientInput::from_fields(fields)?;
        self.submit(input)
    }

    /// Every recorded entry, oldest first
    #[must_use]
    pub fn history(&self) -> &PredictionHistory {
        &self.history
    }

    /// Up to the last `n` entries, most recent first
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.history.recent(n)
    }

    /// Drop every recorded entry
    pub fn clear_history(&mut self) {
        log::info!("Clearing {} history entries", self.history.len());
        self.history.clear();
    }

    /// Feature importances paired with field names, when the loaded model
    /// exposes them
    #[must_use]
    pub fn feature_importances(&self) -> Option<Vec<(&'static str, f64)>> {
        self.engine.as_ref()?.feature_importances()
    }

    /// Name of the loaded classifier, when prediction is enabled
    #[must_use]
    pub fn classifier_name(&self) -> Option<&str> {
        self.engine.as_ref().map(PredictionEngine::classifier_name)
    }
}
