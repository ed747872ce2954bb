//! Glucose level categorization
//!
//! This module implements the two glucose classifications used by the
//! screening flow. The five-band analysis distinguishes fasting thresholds
//! (100/126 mg/dL) from 2-hour post-load thresholds (140/200 mg/dL); the
//! three-band classification collapses to the 2-hour thresholds alone for
//! live feedback and history entries. The two are deliberately separate and
//! must not be merged, or the fasting vs. post-meal distinction is lost.

use crate::models::types::{ColorHint, GlucoseBand, GlucoseCategory, RiskLevel};

/// Glucose value at and above which a measurement is critically high, mg/dL
pub const CRITICAL_GLUCOSE: f64 = 200.0;

/// Combined categorization of a single glucose measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlucoseAnalysis {
    /// Five-band clinical category
    pub category: GlucoseCategory,
    /// Color hint for the category
    pub color: ColorHint,
    /// Coarse risk tier
    pub risk: RiskLevel,
}

/// Categorize a glucose measurement on the five fasting/2-hour bands
///
/// Thresholds are half-open intervals evaluated in ascending order, first
/// match wins: below 100 normal (fasting), 100-125 prediabetes (fasting),
/// 126-139 diabetes (fasting), 140-199 prediabetes (2-hour), 200 and above
/// diabetes (2-hour).
#[must_use]
pub fn analyze_glucose(glucose: f64) -> GlucoseAnalysis {
    let category = if glucose < 100.0 {
        GlucoseCategory::NormalFasting
    } else if glucose < 126.0 {
        GlucoseCategory::PrediabetesFasting
    } else if glucose < 140.0 {
        GlucoseCategory::DiabetesFasting
    } else if glucose < 200.0 {
        GlucoseCategory::PrediabetesTwoHour
    } else {
        GlucoseCategory::DiabetesTwoHour
    };

    GlucoseAnalysis {
        category,
        color: category.color(),
        risk: category.risk(),
    }
}

/// Classify a glucose measurement on the three 2-hour display bands
///
/// Independent of [`analyze_glucose`]: below 140 normal, 140-199
/// prediabetes, 200 and above diabetes.
#[must_use]
pub fn glucose_band(glucose: f64) -> GlucoseBand {
    if glucose < 140.0 {
        GlucoseBand::Normal
    } else if glucose < 200.0 {
        GlucoseBand::Prediabetes
    } else {
        GlucoseBand::Diabetes
    }
}

/// Whether a glucose measurement calls for an immediate medical warning
#[must_use]
pub fn is_critical(glucose: f64) -> bool {
    glucose >= CRITICAL_GLUCOSE
}

/// One segment of the glucose scale chart
#[derive(Debug, Clone, Copy)]
pub struct ScaleSegment {
    /// Inclusive segment start, mg/dL
    pub start: f64,
    /// Exclusive segment end, mg/dL
    pub end: f64,
    /// Category this segment depicts
    pub category: GlucoseCategory,
}

impl ScaleSegment {
    const fn new(start: f64, end: f64, category: GlucoseCategory) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// Display label for the segment
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Hex color a chart should paint this segment with
    #[must_use]
    pub const fn hex_color(&self) -> &'static str {
        self.category.color().hex()
    }
}

/// Fixed lookup table behind the glucose scale chart, covering 0-400 mg/dL
pub const SCALE_SEGMENTS: [ScaleSegment; 5] = [
    ScaleSegment::new(0.0, 100.0, GlucoseCategory::NormalFasting),
    ScaleSegment::new(100.0, 126.0, GlucoseCategory::PrediabetesFasting),
    ScaleSegment::new(126.0, 140.0, GlucoseCategory::DiabetesFasting),
    ScaleSegment::new(140.0, 200.0, GlucoseCategory::PrediabetesTwoHour),
    ScaleSegment::new(200.0, 400.0, GlucoseCategory::DiabetesTwoHour),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_band_thresholds() {
        assert_eq!(analyze_glucose(50.0).category, GlucoseCategory::NormalFasting);
        assert_eq!(analyze_glucose(99.0).category, GlucoseCategory::NormalFasting);
        assert_eq!(
            analyze_glucose(100.0).category,
            GlucoseCategory::PrediabetesFasting
        );
        assert_eq!(
            analyze_glucose(125.0).category,
            GlucoseCategory::PrediabetesFasting
        );
        assert_eq!(
            analyze_glucose(126.0).category,
            GlucoseCategory::DiabetesFasting
        );
        assert_eq!(
            analyze_glucose(139.0).category,
            GlucoseCategory::DiabetesFasting
        );
        assert_eq!(
            analyze_glucose(140.0).category,
            GlucoseCategory::PrediabetesTwoHour
        );
        assert_eq!(
            analyze_glucose(199.0).category,
            GlucoseCategory::PrediabetesTwoHour
        );
        assert_eq!(
            analyze_glucose(200.0).category,
            GlucoseCategory::DiabetesTwoHour
        );
        assert_eq!(
            analyze_glucose(400.0).category,
            GlucoseCategory::DiabetesTwoHour
        );
    }

    #[test]
    fn test_boundary_just_under_200() {
        assert_eq!(
            analyze_glucose(199.999).category,
            GlucoseCategory::PrediabetesTwoHour
        );
        assert_eq!(
            analyze_glucose(200.0).category,
            GlucoseCategory::DiabetesTwoHour
        );
        assert_eq!(glucose_band(199.999), GlucoseBand::Prediabetes);
        assert_eq!(glucose_band(200.0), GlucoseBand::Diabetes);
    }

    #[test]
    fn test_analysis_color_and_risk() {
        let normal = analyze_glucose(85.0);
        assert_eq!(normal.color, ColorHint::Green);
        assert_eq!(normal.risk, RiskLevel::Low);
        assert_eq!(normal.category.label(), "Normal (Puasa)");

        let fasting_pre = analyze_glucose(120.0);
        assert_eq!(fasting_pre.color, ColorHint::Orange);
        assert_eq!(fasting_pre.risk, RiskLevel::Medium);
        assert_eq!(fasting_pre.category.label(), "Prediabetes (Puasa)");
        assert_eq!(fasting_pre.risk.label(), "Sedang");

        let diabetic = analyze_glucose(250.0);
        assert_eq!(diabetic.color, ColorHint::Red);
        assert_eq!(diabetic.risk, RiskLevel::High);
        assert_eq!(diabetic.category.label(), "Diabetes (2 jam)");
    }

    #[test]
    fn test_three_band_thresholds() {
        assert_eq!(glucose_band(139.0), GlucoseBand::Normal);
        assert_eq!(glucose_band(140.0), GlucoseBand::Prediabetes);
        assert_eq!(glucose_band(199.0), GlucoseBand::Prediabetes);
        assert_eq!(glucose_band(200.0), GlucoseBand::Diabetes);

        assert_eq!(glucose_band(120.0).name(), "Normal");
        assert_eq!(glucose_band(120.0).label(), "Normal (2 jam)");
        assert_eq!(glucose_band(150.0).label(), "Prediabetes (2 jam)");
        assert_eq!(glucose_band(210.0).label(), "Diabetes (2 jam)");

        assert_eq!(glucose_band(120.0).risk(), RiskLevel::Low);
        assert_eq!(glucose_band(150.0).risk(), RiskLevel::Medium);
        assert_eq!(glucose_band(210.0).risk(), RiskLevel::High);
    }

    #[test]
    fn test_classifications_stay_distinct() {
        // 120 mg/dL is prediabetic on the fasting bands but normal on the
        // 2-hour display bands; both results must coexist.
        let analysis = analyze_glucose(120.0);
        let band = glucose_band(120.0);

        assert_eq!(analysis.category, GlucoseCategory::PrediabetesFasting);
        assert_eq!(analysis.risk, RiskLevel::Medium);
        assert_eq!(band, GlucoseBand::Normal);
        assert_eq!(band.risk(), RiskLevel::Low);
    }

    #[test]
    fn test_is_critical() {
        assert!(!is_critical(199.999));
        assert!(is_critical(200.0));
        assert!(is_critical(350.0));
    }

    #[test]
    fn test_scale_segments_cover_chart_range() {
        assert_eq!(SCALE_SEGMENTS[0].start, 0.0);
        assert_eq!(SCALE_SEGMENTS[SCALE_SEGMENTS.len() - 1].end, 400.0);

        for pair in SCALE_SEGMENTS.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        assert_eq!(SCALE_SEGMENTS[0].hex_color(), "#28a745");
        assert_eq!(SCALE_SEGMENTS[1].hex_color(), "#ffc107");
        assert_eq!(SCALE_SEGMENTS[2].hex_color(), "#dc3545");
        assert_eq!(SCALE_SEGMENTS[3].label(), "Prediabetes (2 jam)");
    }
}
