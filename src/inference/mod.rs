//! Prediction engine adapter
//!
//! This module isolates the rest of the crate from the concrete classifier
//! and scaler artifacts. [`Classifier`] is the narrow interface any model
//! must satisfy; [`scaler::StandardScaler`] normalizes feature vectors;
//! [`engine::PredictionEngine`] ties the two together and produces verified
//! [`PredictionResult`] values.

pub mod artifacts;
pub mod engine;
pub mod forest;
pub mod scaler;

pub use artifacts::{PredictionArtifacts, load_model, load_scaler};
pub use engine::PredictionEngine;
pub use forest::{DecisionTree, RandomForestModel};
pub use scaler::StandardScaler;

use crate::error::PredictionError;
use crate::models::types::PredictedClass;

/// Tolerance for a probability distribution summing to one
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Narrow interface over a concrete classification model
///
/// Exactly the two operations the screening flow uses, plus an optional
/// capability probe for feature importances. Any implementation can be
/// substituted, including test doubles.
pub trait Classifier {
    /// Class label for a scaled feature vector
    fn predict(&self, features: &[f64]) -> Result<usize, PredictionError>;

    /// Probability distribution over the outcome classes for a scaled
    /// feature vector
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, PredictionError>;

    /// Per-feature importance weights in input order, when the model
    /// exposes them
    fn feature_importances(&self) -> Option<Vec<f64>> {
        None
    }

    /// Identifier used in log output
    fn name(&self) -> &str;
}

/// Verified outcome of one classification
///
/// Holds the binary class and the two-element probability distribution over
/// {non-diabetic, diabetic}. Construction verifies the distribution and
/// never repairs it, so a value of this type is always well formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    class: PredictedClass,
    probabilities: [f64; 2],
}

impl PredictionResult {
    /// Assemble a result from a class label and its probability distribution
    ///
    /// Both entries must be finite and non-negative and sum to 1 within
    /// [`PROBABILITY_TOLERANCE`].
    pub fn new(
        class: PredictedClass,
        probabilities: [f64; 2],
    ) -> Result<Self, PredictionError> {
        for p in probabilities {
            if !p.is_finite() || p < 0.0 {
                return Err(PredictionError::InvalidDistribution {
                    reason: format!("entry {p} is not a finite non-negative probability"),
                });
            }
        }

        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(PredictionError::InvalidDistribution {
                reason: format!("probabilities sum to {sum}, expected 1"),
            });
        }

        Ok(Self {
            class,
            probabilities,
        })
    }

    /// The predicted outcome class
    #[must_use]
    pub const fn class(&self) -> PredictedClass {
        self.class
    }

    /// The probability distribution in class-label order
    #[must_use]
    pub const fn probabilities(&self) -> [f64; 2] {
        self.probabilities
    }

    /// Probability assigned to a specific class
    #[must_use]
    pub fn probability_of(&self, class: PredictedClass) -> f64 {
        self.probabilities[class.index()]
    }

    /// Probability of the non-diabetic outcome
    #[must_use]
    pub fn non_diabetic(&self) -> f64 {
        self.probabilities[PredictedClass::NonDiabetic.index()]
    }

    /// Probability of the diabetic outcome
    #[must_use]
    pub fn diabetic(&self) -> f64 {
        self.probabilities[PredictedClass::Diabetic.index()]
    }
}
