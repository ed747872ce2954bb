//! Standard scaler artifact
//!
//! Externally fit z-score normalization: `(x - mean) / scale` per feature.
//! The fitted arrays are in the fixed input field order; the whole point of
//! the scaler is that it was fit on that exact order, so permuting a vector
//! before transforming it produces different (wrong) output.

use itertools::izip;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::PredictionError;
use crate::models::patient::FIELD_COUNT;

/// Externally fit z-score scaler
///
/// `mean` and `scale` must have the same length; artifacts are checked at
/// load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature mean subtracted from the input
    pub mean: Vec<f64>,
    /// Per-feature scale the centered value is divided by
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from fitted arrays
    #[must_use]
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Number of features the scaler was fit on
    #[must_use]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Whether the scaler was fit on no features
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Normalize a feature vector
    ///
    /// Fails when the vector length does not match the fitted arrays.
    pub fn transform(
        &self,
        features: &[f64],
    ) -> Result<SmallVec<[f64; FIELD_COUNT]>, PredictionError> {
        if features.len() != self.mean.len() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }

        Ok(izip!(features, &self.mean, &self.scale)
            .map(|(x, mean, scale)| (x - mean) / scale)
            .collect())
    }
}
