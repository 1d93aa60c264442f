//! Unit tests for hazard report composition

use chrono::{TimeZone, Utc};
use envguard::hazards::report::recommendations;
use envguard::hazards::{classify_heat_index, HazardReport};
use envguard::models::{Coordinates, HeatCategory, Location, Pollutant, PollutantReadings};

fn mumbai() -> Location {
    Location::new(
        Coordinates::new(19.076, 72.8777),
        "Mumbai, Mumbai Suburban, Maharashtra, India",
    )
}

fn clean_air() -> PollutantReadings {
    let mut readings = PollutantReadings::new();
    readings.insert(Pollutant::Pm25, 8.0);
    readings.insert(Pollutant::O3, 20.0);
    readings
}

fn build(temperature: f64, humidity: f64, readings: &PollutantReadings) -> HazardReport {
    let generated_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    HazardReport::build(mumbai(), temperature, humidity, readings, generated_at)
}

#[test]
fn test_calm_conditions_need_no_precautions() {
    let report = build(24.0, 50.0, &clean_air());
    assert!(!report.has_hazards());
    assert!(report.warnings.is_empty());
    assert_eq!(
        report.recommendations,
        vec!["No special precautions needed at this time".to_string()]
    );
    assert_eq!(report.air_quality.as_ref().unwrap().dominant_pollutant, Pollutant::Pm25);
}

#[test]
fn test_heat_adds_heat_precautions() {
    let report = build(35.0, 70.0, &clean_air());
    assert!(report.has_hazards());
    assert_eq!(report.heat_index.category, HeatCategory::Danger);
    assert_eq!(report.recommendations[0], "Limit outdoor activities");
    assert!(report.recommendations.contains(&"Stay hydrated".to_string()));
    assert!(!report.recommendations.contains(&"Keep windows closed".to_string()));
}

#[test]
fn test_pollution_and_heat_combine() {
    let mut readings = clean_air();
    readings.insert(Pollutant::Pm25, 80.0);

    let report = build(35.0, 70.0, &readings);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.recommendations.len(), 7);
}

#[test]
fn test_recommendation_threshold_is_inclusive() {
    let at_threshold = classify_heat_index(32.0);
    assert_eq!(recommendations(&at_threshold, &[]).len(), 4);

    let below = classify_heat_index(31.9);
    assert_eq!(recommendations(&below, &[]).len(), 1);
}

#[test]
fn test_report_without_readings_has_no_aqi() {
    let report = build(24.0, 50.0, &PollutantReadings::new());
    assert!(report.air_quality.is_none());
}

#[test]
fn test_render_text() {
    let mut readings = clean_air();
    readings.insert(Pollutant::Pm25, 40.0);
    let text = build(35.0, 70.0, &readings).render_text();

    assert!(text.starts_with("Environmental Hazards Report"));
    assert!(text.contains("Location: Mumbai\n"));
    assert!(text.contains("2024-06-01 12:00 UTC"));
    assert!(text.contains("- Temperature: 35.0°C"));
    assert!(text.contains("- Status: Danger"));
    assert!(text.contains("Air Quality Index: 112 (Unhealthy for Sensitive Groups, dominant PM25)"));
    assert!(text.contains("- PM2.5 (Fine particulate matter)"));
    assert!(text.contains("12.7% above safe level"));
    assert!(text.ends_with("Coordinates: 19.0760, 72.8777"));
}

#[test]
fn test_display_matches_render_text() {
    let report = build(24.0, 50.0, &clean_air());
    let text = format!("{}", report);
    assert_eq!(text, report.render_text());
    assert!(text.contains("Air quality is currently within safe limits.\n"));
    assert!(text.contains("- No special precautions needed at this time\n"));
}
