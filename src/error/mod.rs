//! Error handling for the screening library.
//!
//! The taxonomy mirrors the three failure surfaces of the system: loading
//! the serialized model/scaler artifacts, validating raw patient input, and
//! running the classifier on a shaped feature vector. `ScreenError` is the
//! umbrella type returned by session-level operations.

use std::path::PathBuf;
use std::{fmt, io};

/// Errors raised while loading or resolving the model/scaler artifacts
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Artifact file does not exist
    #[error("artifact file not found: {path}")]
    NotFound {
        /// Path that was probed
        path: PathBuf,
    },

    /// Artifact file exists but could not be read
    #[error("failed to read artifact {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: io::Error,
    },

    /// Artifact file is not valid JSON for the expected shape
    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        /// Path that was being parsed
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// Artifact deserialized cleanly but its contents are unusable
    #[error("invalid artifact {path}: {reason}")]
    Invalid {
        /// Path the artifact came from
        path: PathBuf,
        /// What the structural check rejected
        reason: String,
    },

    /// Prediction was requested on a session whose artifacts never loaded
    #[error("prediction disabled: {reason}")]
    Unavailable {
        /// Load failure recorded when the session was created
        reason: String,
    },
}

/// Errors raised by the patient input gate
///
/// Every variant names the offending field so a caller that bypassed the
/// bounded entry controls can still report what was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent from the raw field map
    #[error("missing field: {field}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// The raw field map carries a name outside the eight known fields
    #[error("unknown field: {name}")]
    UnknownField {
        /// The unrecognized name
        name: String,
    },

    /// A field value is NaN or infinite
    #[error("field {field} is not a finite number")]
    NotFinite {
        /// Name of the malformed field
        field: &'static str,
    },

    /// An integer field carries a fractional value
    #[error("field {field} must be an integer, got {value}")]
    FractionalInteger {
        /// Name of the malformed field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A field value lies outside its declared closed range
    #[error("field {field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        /// Name of the out-of-range field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound of the declared range
        min: f64,
        /// Upper bound of the declared range
        max: f64,
    },
}

/// Errors raised by the classifier or scaler on a shaped feature vector
///
/// These are deterministic: the same input fails the same way, so callers
/// surface them without retrying.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// Vector length does not match what the artifact was fit on
    #[error("feature vector has wrong dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension the artifact expects
        expected: usize,
        /// Dimension that was supplied
        actual: usize,
    },

    /// Classifier produced a class label outside the known outcome set
    #[error("classifier returned unknown class label {label}")]
    UnknownLabel {
        /// The unmapped label
        label: usize,
    },

    /// Classifier produced a distribution that is not a 2-class probability
    #[error("classifier returned an invalid probability distribution: {reason}")]
    InvalidDistribution {
        /// What the verification rejected
        reason: String,
    },
}

/// Umbrella error type for screening operations
#[derive(Debug)]
pub enum ScreenError {
    /// Error loading artifacts or predicting on a degraded session
    Artifact(ArtifactError),
    /// Error validating raw patient input
    Validation(ValidationError),
    /// Error running the scaler or classifier
    Prediction(PredictionError),
}

impl From<ArtifactError> for ScreenError {
    fn from(error: ArtifactError) -> Self {
        Self::Artifact(error)
    }
}

impl From<ValidationError> for ScreenError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<PredictionError> for ScreenError {
    fn from(error: PredictionError) -> Self {
        Self::Prediction(error)
    }
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact(e) => write!(f, "Artifact error: {e}"),
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Prediction(e) => write!(f, "Prediction error: {e}"),
        }
    }
}

impl std::error::Error for ScreenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Artifact(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Prediction(e) => Some(e),
        }
    }
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreenError>;
