//! Unit tests for pollutant identifiers and result serialization

use std::str::FromStr;

use envguard::hazards::aggregate;
use envguard::models::{Pollutant, PollutantReadings};
use serde_json::Value;

#[test]
fn test_pollutant_ids_round_trip() {
    for pollutant in Pollutant::ALL {
        assert_eq!(Pollutant::from_str(pollutant.id()).unwrap(), pollutant);
    }
}

#[test]
fn test_pollutant_ids_are_case_sensitive() {
    assert!(Pollutant::from_str("PM25").is_err());
    assert!(Pollutant::from_str("pm2_5").is_err());
}

#[test]
fn test_enumeration_order() {
    let mut sorted = Pollutant::ALL.to_vec();
    sorted.sort();
    assert_eq!(sorted, Pollutant::ALL.to_vec());
    assert_eq!(Pollutant::ALL[0], Pollutant::Pm25);
}

#[test]
fn test_air_quality_result_json_shape() {
    let mut readings = PollutantReadings::new();
    readings.insert(Pollutant::Pm25, 40.0);
    readings.insert(Pollutant::Co, 300.0);

    let result = aggregate(&readings).unwrap();
    let json: Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["value"], 112);
    assert_eq!(json["category"], "Unhealthy for Sensitive Groups");
    assert_eq!(json["color"], "orange");
    assert_eq!(json["dominantPollutant"], "pm25");
    assert_eq!(json["individualIndices"]["pm25"], 112);
    assert_eq!(json["individualIndices"]["co"], 3);
}

#[test]
fn test_readings_deserialize_from_ids() {
    let readings: PollutantReadings = serde_json::from_str(r#"{"o3": 30.0, "pm10": 60}"#).unwrap();
    assert_eq!(readings[&Pollutant::O3], 30.0);
    assert_eq!(readings[&Pollutant::Pm10], 60.0);

    let unknown: Result<PollutantReadings, _> = serde_json::from_str(r#"{"radon": 1.0}"#);
    assert!(unknown.is_err());
}
