//! Common domain type definitions
//!
//! This module contains the category and outcome enum types used across
//! the screening models to ensure consistency and facilitate code reuse.

use std::fmt;

/// Coarse clinical risk tier attached to a glucose category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl RiskLevel {
    /// Display label as shown to the user
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Rendah",
            Self::Medium => "Sedang",
            Self::High => "Tinggi",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Color hint a presentation layer should use for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorHint {
    /// Within normal limits
    Green,
    /// Borderline, warrants attention
    Orange,
    /// Clinically elevated
    Red,
}

impl ColorHint {
    /// CSS-style color name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    /// Hex value used by the glucose scale chart
    #[must_use]
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#28a745",
            Self::Orange => "#ffc107",
            Self::Red => "#dc3545",
        }
    }
}

/// Five-band glucose category distinguishing fasting and 2-hour contexts
///
/// The fasting bands use the stricter thresholds (100/126 mg/dL), the
/// 2-hour bands the post-load thresholds (140/200 mg/dL). Deliberately
/// separate from [`GlucoseBand`], which collapses to the 2-hour thresholds
/// alone; the two classifications serve different purposes and must not be
/// merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlucoseCategory {
    /// Below 100 mg/dL, normal in the fasting context
    NormalFasting,
    /// 100-125 mg/dL, prediabetic in the fasting context
    PrediabetesFasting,
    /// 126-139 mg/dL, diabetic in the fasting context
    DiabetesFasting,
    /// 140-199 mg/dL, prediabetic in the 2-hour context
    PrediabetesTwoHour,
    /// 200 mg/dL and above, diabetic in the 2-hour context
    DiabetesTwoHour,
}

impl GlucoseCategory {
    /// Display label as shown to the user
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NormalFasting => "Normal (Puasa)",
            Self::PrediabetesFasting => "Prediabetes (Puasa)",
            Self::DiabetesFasting => "Diabetes (Puasa)",
            Self::PrediabetesTwoHour => "Prediabetes (2 jam)",
            Self::DiabetesTwoHour => "Diabetes (2 jam)",
        }
    }

    /// Color hint for this category
    #[must_use]
    pub const fn color(&self) -> ColorHint {
        match self {
            Self::NormalFasting => ColorHint::Green,
            Self::PrediabetesFasting | Self::PrediabetesTwoHour => ColorHint::Orange,
            Self::DiabetesFasting | Self::DiabetesTwoHour => ColorHint::Red,
        }
    }

    /// Risk tier for this category
    #[must_use]
    pub const fn risk(&self) -> RiskLevel {
        match self {
            Self::NormalFasting => RiskLevel::Low,
            Self::PrediabetesFasting | Self::PrediabetesTwoHour => RiskLevel::Medium,
            Self::DiabetesFasting | Self::DiabetesTwoHour => RiskLevel::High,
        }
    }
}

impl fmt::Display for GlucoseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Three-band glucose classification on the 2-hour thresholds alone
///
/// Used for live feedback and for history entries. Independent of
/// [`GlucoseCategory`]: 120 mg/dL is `Normal` here but prediabetic in the
/// fasting bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlucoseBand {
    /// Below 140 mg/dL
    Normal,
    /// 140-199 mg/dL
    Prediabetes,
    /// 200 mg/dL and above
    Diabetes,
}

impl GlucoseBand {
    /// Bare band name for live feedback
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Prediabetes => "Prediabetes",
            Self::Diabetes => "Diabetes",
        }
    }

    /// Display label carried by history entries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal (2 jam)",
            Self::Prediabetes => "Prediabetes (2 jam)",
            Self::Diabetes => "Diabetes (2 jam)",
        }
    }

    /// Color hint for this band
    #[must_use]
    pub const fn color(&self) -> ColorHint {
        match self {
            Self::Normal => ColorHint::Green,
            Self::Prediabetes => ColorHint::Orange,
            Self::Diabetes => ColorHint::Red,
        }
    }

    /// Risk tier for this band
    #[must_use]
    pub const fn risk(&self) -> RiskLevel {
        match self {
            Self::Normal => RiskLevel::Low,
            Self::Prediabetes => RiskLevel::Medium,
            Self::Diabetes => RiskLevel::High,
        }
    }
}

impl fmt::Display for GlucoseBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Body mass index category, informational only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    /// Below 18.5 kg/m²
    Underweight,
    /// 18.5-24.9 kg/m²
    Normal,
    /// 25-29.9 kg/m²
    Overweight,
    /// 30 kg/m² and above
    Obese,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Binary outcome class produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictedClass {
    /// Class label 0
    NonDiabetic,
    /// Class label 1
    Diabetic,
}

impl PredictedClass {
    /// Maps a raw classifier label to a class, `None` for anything
    /// outside the two known labels
    #[must_use]
    pub const fn from_label(label: usize) -> Option<Self> {
        match label {
            0 => Some(Self::NonDiabetic),
            1 => Some(Self::Diabetic),
            _ => None,
        }
    }

    /// Position of this class in a probability distribution
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::NonDiabetic => 0,
            Self::Diabetic => 1,
        }
    }

    /// Display label
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NonDiabetic => "Non-Diabetes",
            Self::Diabetic => "Diabetes",
        }
    }

    /// Whether this is the diabetic outcome
    #[must_use]
    pub const fn is_diabetic(&self) -> bool {
        matches!(self, Self::Diabetic)
    }
}

impl fmt::Display for PredictedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
