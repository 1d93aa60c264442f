//! Unit tests for heat index computation and classification

use envguard::hazards::{classify_heat_index, compute_heat_index, heat_index_info, try_heat_index_info, HazardError};
use envguard::models::{HazardColor, HeatCategory};

#[test]
fn test_heat_index_matches_nws_chart() {
    // NWS chart: 80°F at 40% RH reads 80°F (26.7°C)
    let hi = compute_heat_index(26.7, 40.0);
    assert!((hi - 26.7).abs() < 0.5, "heat index was {}", hi);
}

#[test]
fn test_heat_index_hot_and_humid() {
    let hi = compute_heat_index(35.0, 70.0);
    assert!((hi - 50.34).abs() < 0.05, "heat index was {}", hi);
}

#[test]
fn test_heat_index_is_deterministic() {
    let first = compute_heat_index(31.2, 63.0);
    let second = compute_heat_index(31.2, 63.0);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_heat_index_does_not_validate() {
    // Non-physical inputs still produce a number
    assert!(compute_heat_index(-40.0, -10.0).is_finite());
}

#[test]
fn test_classify_extreme_danger_boundary() {
    assert_eq!(classify_heat_index(54.0).category, HeatCategory::ExtremeDanger);
    assert_eq!(classify_heat_index(53.9).category, HeatCategory::Danger);
}

#[test]
fn test_classify_lower_boundaries_are_inclusive() {
    assert_eq!(classify_heat_index(41.0).category, HeatCategory::Danger);
    assert_eq!(classify_heat_index(40.99).category, HeatCategory::ExtremeCaution);
    assert_eq!(classify_heat_index(32.0).category, HeatCategory::ExtremeCaution);
    assert_eq!(classify_heat_index(27.0).category, HeatCategory::Caution);
    assert_eq!(classify_heat_index(26.99).category, HeatCategory::Normal);
}

#[test]
fn test_classify_colors_and_descriptions() {
    let result = classify_heat_index(60.0);
    assert_eq!(result.color, HazardColor::Maroon);
    assert_eq!(
        result.description,
        "Heat stroke highly likely. Outdoor activities should be suspended."
    );
    assert_eq!(result.value, 60.0);

    let result = classify_heat_index(20.0);
    assert_eq!(result.color, HazardColor::Green);
    assert_eq!(result.category.label(), "Normal");
}

#[test]
fn test_classify_is_total() {
    assert_eq!(classify_heat_index(f64::NEG_INFINITY).category, HeatCategory::Normal);
    assert_eq!(classify_heat_index(f64::NAN).category, HeatCategory::Normal);
    assert_eq!(classify_heat_index(f64::INFINITY).category, HeatCategory::ExtremeDanger);
}

#[test]
fn test_heat_index_info_combines_steps() {
    let info = heat_index_info(35.0, 70.0);
    assert_eq!(info.category, HeatCategory::Danger);
    assert_eq!(info.color, HazardColor::Red);
    assert_eq!(info.value, compute_heat_index(35.0, 70.0));
}

#[test]
fn test_try_heat_index_rejects_non_finite() {
    assert!(matches!(
        try_heat_index_info(f64::NAN, 50.0),
        Err(HazardError::NonFinite { .. })
    ));
    assert!(matches!(
        try_heat_index_info(30.0, f64::INFINITY),
        Err(HazardError::NonFinite { .. })
    ));
}

#[test]
fn test_try_heat_index_rejects_humidity_out_of_range() {
    assert!(matches!(
        try_heat_index_info(30.0, 120.0),
        Err(HazardError::OutOfRange { .. })
    ));
    assert!(try_heat_index_info(30.0, 100.0).is_ok());
}
