//! Prediction engine
//!
//! Ties a fitted scaler to a classifier and turns a patient record into a
//! verified prediction result. The engine assumes its input already passed
//! the record-building gate; every failure past that point is a typed
//! `PredictionError`, never a silent default.

use std::fmt;

use crate::error::PredictionError;
use crate::inference::{Classifier, PredictionResult, StandardScaler};
use crate::models::patient::{FIELD_SPECS, PatientInput};
use crate::models::types::PredictedClass;

/// A scaler/classifier pair reused across predictions
pub struct PredictionEngine {
    scaler: StandardScaler,
    classifier: Box<dyn Classifier>,
}

impl PredictionEngine {
    /// Create an engine from a fitted scaler and any classifier
    #[must_use]
    pub fn new(scaler: StandardScaler, classifier: Box<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }

    /// Classify one patient record
    ///
    /// Encodes the record in fixed field order, normalizes it through the
    /// scaler, and asks the classifier for a label and a distribution. The
    /// label must map to a known class and the distribution must be a
    /// 2-class probability; anything else is surfaced as an error.
    pub fn predict(&self, input: &PatientInput) -> Result<PredictionResult, PredictionError> {
        let features = input.to_feature_vector();
        let scaled = self.scaler.transform(&features)?;

        let label = self.classifier.predict(&scaled)?;
        let class = PredictedClass::from_label(label)
            .ok_or(PredictionError::UnknownLabel { label })?;

        let proba = self.classifier.predict_proba(&scaled)?;
        if proba.len() != 2 {
            return Err(PredictionError::InvalidDistribution {
                reason: format!("expected 2 classes, got {}", proba.len()),
            });
        }

        let result = PredictionResult::new(class, [proba[0], proba[1]])?;
        log::debug!(
            "Classifier '{}' predicted {} with distribution {:?}",
            self.classifier.name(),
            result.class(),
            result.probabilities()
        );
        Ok(result)
    }

    /// Per-field importance weights, when the classifier exposes them
    ///
    /// Pairs the weights with the input field names. `None` when the
    /// classifier has no importances or reports the wrong arity; this is
    /// the one deliberately best-effort surface of the crate.
    #[must_use]
    pub fn feature_importances(&self) -> Option<Vec<(&'static str, f64)>> {
        let importances = self.classifier.feature_importances()?;
        if importances.len() != FIELD_SPECS.len() {
            log::warn!(
                "Classifier '{}' reported {} importance weights for {} fields, ignoring them",
                self.classifier.name(),
                importances.len(),
                FIELD_SPECS.len()
            );
            return None;
        }
        Some(
            FIELD_SPECS
                .iter()
                .map(|spec| spec.name)
                .zip(importances)
                .collect(),
        )
    }

    /// Identifier of the underlying classifier
    #[must_use]
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }
}

impl fmt::Debug for PredictionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionEngine")
            .field("scaler_len", &self.scaler.len())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubClassifier {
        label: usize,
        proba: Vec<f64>,
    }

    impl Classifier for StubClassifier {
        fn predict(&self, _features: &[f64]) -> Result<usize, PredictionError> {
            Ok(self.label)
        }

        fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, PredictionError> {
            Ok(self.proba.clone())
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn identity_scaler() -> StandardScaler {
        StandardScaler::new(vec![0.0; 8], vec![1.0; 8])
    }

    #[test]
    fn test_predict_happy_path() {
        let engine = PredictionEngine::new(
            identity_scaler(),
            Box::new(StubClassifier {
                label: 0,
                proba: vec![0.8, 0.2],
            }),
        );

        let result = engine.predict(&PatientInput::default()).unwrap();
        assert_eq!(result.class(), PredictedClass::NonDiabetic);
        assert_eq!(result.probabilities(), [0.8, 0.2]);
    }

    #[test]
    fn test_predict_rejects_unknown_label() {
        let engine = PredictionEngine::new(
            identity_scaler(),
            Box::new(StubClassifier {
                label: 2,
                proba: vec![0.5, 0.5],
            }),
        );

        let err = engine.predict(&PatientInput::default()).unwrap_err();
        assert!(matches!(err, PredictionError::UnknownLabel { label: 2 }));
    }

    #[test]
    fn test_predict_rejects_three_class_distribution() {
        let engine = PredictionEngine::new(
            identity_scaler(),
            Box::new(StubClassifier {
                label: 1,
                proba: vec![0.2, 0.3, 0.5],
            }),
        );

        let err = engine.predict(&PatientInput::default()).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidDistribution { .. }));
    }

    #[test]
    fn test_predict_surfaces_scaler_mismatch() {
        let engine = PredictionEngine::new(
            StandardScaler::new(vec![0.0; 4], vec![1.0; 4]),
            Box::new(StubClassifier {
                label: 0,
                proba: vec![1.0, 0.0],
            }),
        );

        let err = engine.predict(&PatientInput::default()).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::DimensionMismatch {
                expected: 4,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_feature_importances_pair_with_field_names() {
        struct WeightedStub;
        impl Classifier for WeightedStub {
            fn predict(&self, _features: &[f64]) -> Result<usize, PredictionError> {
                Ok(0)
            }
            fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, PredictionError> {
                Ok(vec![1.0, 0.0])
            }
            fn feature_importances(&self) -> Option<Vec<f64>> {
                Some(vec![0.05, 0.4, 0.1, 0.05, 0.1, 0.15, 0.05, 0.1])
            }
            fn name(&self) -> &str {
                "weighted"
            }
        }

        let engine = PredictionEngine::new(identity_scaler(), Box::new(WeightedStub));
        let pairs = engine.feature_importances().unwrap();
        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs[1], ("Glucose", 0.4));
    }

    #[test]
    fn test_feature_importances_absent_by_default() {
        let engine = PredictionEngine::new(
            identity_scaler(),
            Box::new(StubClassifier {
                label: 0,
                proba: vec![1.0, 0.0],
            }),
        );
        assert!(engine.feature_importances().is_none());
    }

    #[test]
    fn test_feature_importances_wrong_arity_is_dropped() {
        struct ShortStub;
        impl Classifier for ShortStub {
            fn predict(&self, _features: &[f64]) -> Result<usize, PredictionError> {
                Ok(0)
            }
            fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, PredictionError> {
                Ok(vec![1.0, 0.0])
            }
            fn feature_importances(&self) -> Option<Vec<f64>> {
                Some(vec![1.0])
            }
            fn name(&self) -> &str {
                "short"
            }
        }

        let engine = PredictionEngine::new(identity_scaler(), Box::new(ShortStub));
        assert!(engine.feature_importances().is_none());
    }
}
