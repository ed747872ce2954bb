//! Domain models for the screening flow
//!
//! This module contains the core data types used throughout the library:
//! the validated patient input record, the category and outcome enums, and
//! the session-scoped prediction history.

pub mod history;
pub mod patient;
pub mod types;

// Re-export commonly used types
pub use history::{HistoryEntry, PredictionHistory};
pub use patient::{FIELD_COUNT, FIELD_SPECS, FieldSpec, PatientInput, default_fields};
pub use types::{
    BmiCategory, ColorHint, GlucoseBand, GlucoseCategory, PredictedClass, RiskLevel,
};
