//! Patient input record model
//!
//! This module contains the `PatientInput` record, the validated bundle of
//! eight medical measurements forming the classifier's feature vector, and
//! the `FieldSpec` table declaring each field's bounds and entry metadata.

use crate::error::ValidationError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Number of input fields in the feature vector
pub const FIELD_COUNT: usize = 8;

/// Declared bounds and entry metadata for one input field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Canonical field name used in raw field maps
    pub name: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Default control value
    pub default: f64,
    /// Whether the field only admits whole numbers
    pub integer: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, min: f64, max: f64, default: f64, integer: bool) -> Self {
        Self {
            name,
            min,
            max,
            default,
            integer,
        }
    }

    /// Check a single raw value against this field's declaration
    pub fn check(&self, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field: self.name });
        }
        if self.integer && value.fract() != 0.0 {
            return Err(ValidationError::FractionalInteger {
                field: self.name,
                value,
            });
        }
        if value < self.min || value > self.max {
            return Err(ValidationError::OutOfRange {
                field: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Field table in model feature order
///
/// The order is load-bearing: the scaler and classifier were fit on exactly
/// this sequence, and reordering silently produces wrong results. The same
/// table drives the raw-map builder and supplies the bounds for any entry
/// controls a caller renders.
pub const FIELD_SPECS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec::new("Pregnancies", 0.0, 20.0, 1.0, true),
    FieldSpec::new("Glucose", 50.0, 400.0, 120.0, true),
    FieldSpec::new("BloodPressure", 40.0, 180.0, 70.0, true),
    FieldSpec::new("SkinThickness", 0.0, 99.0, 20.0, true),
    FieldSpec::new("Insulin", 0.0, 1000.0, 80.0, true),
    FieldSpec::new("BMI", 10.0, 60.0, 25.0, false),
    FieldSpec::new("DiabetesPedigreeFunction", 0.08, 2.5, 0.5, false),
    FieldSpec::new("Age", 0.0, 100.0, 30.0, true),
];

/// A raw field map populated with every field's default control value
#[must_use]
pub fn default_fields() -> FxHashMap<String, f64> {
    FIELD_SPECS
        .iter()
        .map(|spec| (spec.name.to_string(), spec.default))
        .collect()
}

/// Validated bundle of eight medical measurements for one patient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Number of pregnancies
    pub pregnancies: u16,
    /// Plasma glucose concentration, mg/dL
    pub glucose: u16,
    /// Diastolic blood pressure, mm Hg
    pub blood_pressure: u16,
    /// Triceps skin fold thickness, mm
    pub skin_thickness: u16,
    /// 2-hour serum insulin, µU/mL
    pub insulin: u16,
    /// Body mass index, kg/m²
    pub bmi: f64,
    /// Diabetes pedigree function score
    pub diabetes_pedigree: f64,
    /// Age in years
    pub age: u16,
}

impl PatientInput {
    /// Create a new patient record from already-checked values
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        pregnancies: u16,
        glucose: u16,
        blood_pressure: u16,
        skin_thickness: u16,
        insulin: u16,
        bmi: f64,
        diabetes_pedigree: f64,
        age: u16,
    ) -> Self {
        Self {
            pregnancies,
            glucose,
            blood_pressure,
            skin_thickness,
            insulin,
            bmi,
            diabetes_pedigree,
            age,
        }
    }

    /// Build a record from a raw field map
    ///
    /// This is the one gate in front of prediction: the map must contain
    /// exactly the eight known field names, every value must be finite,
    /// integer fields must carry whole numbers, and every value must lie
    /// within its declared range. The error names the offending field.
    pub fn from_fields(fields: &FxHashMap<String, f64>) -> Result<Self, ValidationError> {
        for name in fields.keys() {
            if !FIELD_SPECS.iter().any(|spec| spec.name == name.as_str()) {
                return Err(ValidationError::UnknownField { name: name.clone() });
            }
        }

        let mut values = [0.0_f64; FIELD_COUNT];
        for (slot, spec) in values.iter_mut().zip(&FIELD_SPECS) {
            let value = *fields
                .get(spec.name)
                .ok_or(ValidationError::MissingField { field: spec.name })?;
            spec.check(value)?;
            *slot = value;
        }

        Ok(Self {
            pregnancies: values[0] as u16,
            glucose: values[1] as u16,
            blood_pressure: values[2] as u16,
            skin_thickness: values[3] as u16,
            insulin: values[4] as u16,
            bmi: values[5],
            diabetes_pedigree: values[6],
            age: values[7] as u16,
        })
    }

    /// Re-check an already-constructed record against the field table
    ///
    /// Construction through [`Self::from_fields`] cannot produce an invalid
    /// record, but the fields are public; this catches records assembled or
    /// mutated by hand before a prediction is made on them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (spec, value) in FIELD_SPECS.iter().zip(self.to_feature_vector()) {
            spec.check(value)?;
        }
        Ok(())
    }

    /// Encode the record as a feature vector in fixed field order
    #[must_use]
    pub fn to_feature_vector(&self) -> SmallVec<[f64; FIELD_COUNT]> {
        smallvec![
            f64::from(self.pregnancies),
            f64::from(self.glucose),
            f64::from(self.blood_pressure),
            f64::from(self.skin_thickness),
            f64::from(self.insulin),
            self.bmi,
            self.diabetes_pedigree,
            f64::from(self.age),
        ]
    }
}

impl Default for PatientInput {
    fn default() -> Self {
        Self::new(1, 120, 70, 20, 80, 25.0, 0.5, 30)
    }
}
