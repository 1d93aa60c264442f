//! Unit tests for boundary validation

use envguard::hazards::{validate_concentration, validate_humidity, validate_readings, validate_temperature, HazardError};
use envguard::models::{Pollutant, PollutantReadings};

#[test]
fn test_validate_temperature() {
    assert_eq!(validate_temperature(-12.5), Ok(-12.5));
    assert_eq!(
        validate_temperature(f64::NAN),
        Err(HazardError::NonFinite {
            field: "temperature".to_string()
        })
    );
}

#[test]
fn test_validate_humidity_range() {
    assert!(validate_humidity(0.0).is_ok());
    assert!(validate_humidity(100.0).is_ok());
    assert!(validate_humidity(-0.1).is_err());
    assert!(validate_humidity(f64::NEG_INFINITY).is_err());
}

#[test]
fn test_validate_concentration_names_pollutant() {
    assert_eq!(
        validate_concentration(Pollutant::So2, -1.0),
        Err(HazardError::OutOfRange {
            field: "so2".to_string(),
            value: -1.0
        })
    );
    assert!(validate_concentration(Pollutant::So2, 0.0).is_ok());
}

#[test]
fn test_validate_readings() {
    assert_eq!(validate_readings(&PollutantReadings::new()), Err(HazardError::NoReadings));

    let mut readings = PollutantReadings::new();
    readings.insert(Pollutant::Co, 500.0);
    assert!(validate_readings(&readings).is_ok());

    readings.insert(Pollutant::O3, f64::INFINITY);
    assert!(validate_readings(&readings).is_err());
}
