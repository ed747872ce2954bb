//! A Rust library for diabetes risk screening: validated patient input
//! records, clinical glucose and BMI categorization, prediction over
//! serialized scaler/classifier artifacts, and session-scoped history.

pub mod advice;
pub mod algorithm;
pub mod config;
pub mod error;
pub mod inference;
pub mod models;
pub mod session;

// Re-export the most common types for easier use
// Core types
pub use config::ScreenConfig;
pub use error::{Result, ScreenError};
pub use models::{HistoryEntry, PatientInput, PredictionHistory};
pub use session::ScreenSession;

// Categorization
pub use algorithm::bmi::bmi_category;
pub use algorithm::glucose::{GlucoseAnalysis, analyze_glucose, glucose_band, is_critical};
pub use models::{BmiCategory, ColorHint, GlucoseBand, GlucoseCategory, PredictedClass, RiskLevel};

// Inference
pub use inference::{
    Classifier, PredictionArtifacts, PredictionEngine, PredictionResult, load_model, load_scaler,
};

// Recommendations
pub use advice::{Recommendation, recommendations_for};
