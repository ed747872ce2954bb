//! Body mass index categorization
//!
//! Informational categorization of a BMI value on the standard WHO bands.
//! Independent of the prediction flow; the classifier consumes the raw BMI
//! value, never this category.

use crate::models::types::BmiCategory;

/// Categorize a body mass index value
///
/// Below 18.5 underweight, 18.5-24.9 normal, 25-29.9 overweight, 30 and
/// above obese.
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_thresholds() {
        assert_eq!(bmi_category(10.0), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(24.9), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.9), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
        assert_eq!(bmi_category(60.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_labels() {
        assert_eq!(bmi_category(17.0).label(), "Underweight");
        assert_eq!(bmi_category(22.0).label(), "Normal");
        assert_eq!(bmi_category(27.0).label(), "Overweight");
        assert_eq!(bmi_category(32.0).label(), "Obese");
    }
}
