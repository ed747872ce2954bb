//! End-to-end tests of the screening flow through the public API, using a
//! substitute classifier so outcomes are exact.

use diabetes_screen::error::PredictionError;
use diabetes_screen::inference::StandardScaler;
use diabetes_screen::models::default_fields;
use diabetes_screen::{
    Classifier, GlucoseBand, PatientInput, PredictedClass, PredictionEngine, RiskLevel,
    ScreenConfig, ScreenError, ScreenSession, analyze_glucose, bmi_category, glucose_band,
    recommendations_for,
};

struct FixedClassifier {
    label: usize,
    proba: Vec<f64>,
}

impl Classifier for FixedClassifier {
    fn predict(&self, _features: &[f64]) -> Result<usize, PredictionError> {
        Ok(self.label)
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, PredictionError> {
        Ok(self.proba.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

fn session_with(label: usize, proba: Vec<f64>) -> ScreenSession {
    let scaler = StandardScaler::new(vec![0.0; 8], vec![1.0; 8]);
    let engine = PredictionEngine::new(scaler, Box::new(FixedClassifier { label, proba }));
    ScreenSession::with_engine(engine)
}

#[test]
fn test_default_record_screening_cycle() {
    let mut session = session_with(0, vec![0.8, 0.2]);

    let input = PatientInput::default();
    assert_eq!(input.glucose, 120);

    // The five-band analysis and the two-hour band disagree at 120
    let analysis = analyze_glucose(f64::from(input.glucose));
    assert_eq!(analysis.category.label(), "Prediabetes (Puasa)");
    assert_eq!(glucose_band(f64::from(input.glucose)), GlucoseBand::Normal);

    let entry = session.submit(input).unwrap();

    // History categorizes on the two-hour band
    assert_eq!(entry.category_label(), "Normal (2 jam)");
    assert_eq!(entry.glucose_band.risk(), RiskLevel::Low);
    assert_eq!(entry.glucose_band.risk().label(), "Rendah");
    assert_eq!(entry.result.class(), PredictedClass::NonDiabetic);
    assert_eq!(entry.result.class().name(), "Non-Diabetes");
    assert_eq!(entry.result.probabilities(), [0.8, 0.2]);

    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_raw_field_map_submission() {
    let mut session = session_with(1, vec![0.25, 0.75]);

    let mut fields = default_fields();
    fields.insert("Glucose".to_string(), 250.0);
    fields.insert("BMI".to_string(), 31.5);

    let entry = session.submit_fields(&fields).unwrap();
    assert_eq!(entry.glucose(), 250);
    assert_eq!(entry.category_label(), "Diabetes (2 jam)");
    assert_eq!(entry.result.class(), PredictedClass::Diabetic);
    assert_eq!(bmi_category(entry.input.bmi).label(), "Obese");
}

#[test]
fn test_history_orders_most_recent_first() {
    let mut session = session_with(0, vec![0.6, 0.4]);

    for glucose in [90_u16, 150, 210] {
        let input = PatientInput {
            glucose,
            ..PatientInput::default()
        };
        session.submit(input).unwrap();
    }

    let recent = session.recent(5);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].glucose(), 210);
    assert_eq!(recent[1].glucose(), 150);
    assert_eq!(recent[2].glucose(), 90);
    assert_eq!(recent[0].category_label(), "Diabetes (2 jam)");
    assert_eq!(recent[1].category_label(), "Prediabetes (2 jam)");
    assert_eq!(recent[2].category_label(), "Normal (2 jam)");

    // The display cap truncates, the store does not
    let capped = session.recent(2);
    assert_eq!(capped.len(), 2);
    assert_eq!(capped[0].glucose(), 210);
    assert_eq!(session.history().len(), 3);

    session.clear_history();
    assert!(session.recent(5).is_empty());
}

#[test]
fn test_recommendations_track_the_band() {
    let mut session = session_with(1, vec![0.1, 0.9]);
    let input = PatientInput {
        glucose: 210,
        ..PatientInput::default()
    };
    let entry = session.submit(input).unwrap();

    assert_eq!(entry.glucose_band, GlucoseBand::Diabetes);
    let recs = recommendations_for(entry.glucose_band);
    assert!(recs.iter().any(|rec| rec.priority == RiskLevel::High));
    assert!(recs[0].action.contains("Konsultasi"));
}

#[test]
fn test_degraded_session_keeps_categorizers_and_history() {
    let config = ScreenConfig::default()
        .with_model_path("/nonexistent/model.json")
        .with_scaler_path("/nonexistent/scaler.json");
    let mut session = ScreenSession::new(&config);

    assert!(!session.prediction_enabled());
    assert!(session.disabled_reason().unwrap().contains("not found"));

    // Categorization has no artifact dependency
    assert_eq!(glucose_band(185.0), GlucoseBand::Prediabetes);
    assert_eq!(analyze_glucose(185.0).risk, RiskLevel::Medium);

    let err = session.submit(PatientInput::default()).unwrap_err();
    assert!(err.to_string().contains("prediction disabled"));
    assert!(session.history().is_empty());
}

#[test]
fn test_malformed_classifier_output_is_surfaced() {
    let mut session = session_with(0, vec![0.5, 0.3, 0.2]);

    let err = session.submit(PatientInput::default()).unwrap_err();
    assert!(matches!(
        err,
        ScreenError::Prediction(PredictionError::InvalidDistribution { .. })
    ));
    assert!(session.history().is_empty());
}

#[test]
fn test_out_of_range_record_is_rejected_before_prediction() {
    let mut session = session_with(0, vec![0.8, 0.2]);
    let input = PatientInput {
        glucose: 450,
        ..PatientInput::default()
    };

    let err = session.submit(input).unwrap_err();
    assert!(matches!(err, ScreenError::Validation(_)));
    assert!(err.to_string().contains("Glucose"));
    assert!(session.history().is_empty());
}
