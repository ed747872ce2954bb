use anyhow::Context;
use log::{info, warn};

use diabetes_screen::{
    PatientInput, ScreenConfig, ScreenSession, analyze_glucose, bmi_category, glucose_band,
    is_critical, recommendations_for,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ScreenConfig::from_env();
    info!(
        "Using model artifact {} and scaler artifact {}",
        config.model_path.display(),
        config.scaler_path.display()
    );

    let mut session = ScreenSession::new(&config);
    if let Some(reason) = session.disabled_reason() {
        warn!("Running without prediction: {reason}");
    }

    // Categorization works with or without the artifacts
    let input = PatientInput::default();
    let analysis = analyze_glucose(f64::from(input.glucose));
    println!(
        "Glucose {} mg/dL: {} (risk {})",
        input.glucose, analysis.category, analysis.risk
    );

    let band = glucose_band(f64::from(input.glucose));
    println!("Two-hour band: {} (risk {})", band.label(), band.risk());
    println!("BMI {:.1}: {}", input.bmi, bmi_category(input.bmi));

    if is_critical(f64::from(input.glucose)) {
        warn!("Glucose at or above the critical threshold, urgent follow-up advised");
    }

    if !session.prediction_enabled() {
        info!("Prediction disabled, nothing to submit");
        return Ok(());
    }

    let entry = session
        .submit(input)
        .context("submitting the default record")?;
    println!(
        "Prediction: {} ({:.1}% diabetic, {:.1}% non-diabetic)",
        entry.result.class(),
        entry.result.diabetic() * 100.0,
        entry.result.non_diabetic() * 100.0
    );

    println!("Recommendations for {}:", band.name());
    for rec in recommendations_for(entry.glucose_band) {
        println!("  [{}] {}: {}", rec.priority, rec.action, rec.detail);
    }

    if let Some(importances) = session.feature_importances() {
        println!("Feature importances:");
        for (name, weight) in importances {
            println!("  {name}: {weight:.3}");
        }
    }

    println!("Recent history:");
    for recorded in session.recent(config.display_limit) {
        println!(
            "  {} | glucose {} | {} | {}",
            recorded.timestamp_display(),
            recorded.glucose(),
            recorded.category_label(),
            recorded.result.class()
        );
    }

    info!("Screening demo completed");
    Ok(())
}
