use std::collections::HashMap;
use std::str::FromStr;

use crate::hazards::error::HazardError;
use crate::hazards::validation::*;
use crate::models::{Pollutant, PollutantReadings};

pub fn parse_f64(value: &str) -> Result<f64, HazardError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| HazardError::InvalidNumericFormat(value.to_string()))
}

/// Temperature and humidity from string fields
pub fn parse_weather_from_map(data: &HashMap<String, String>) -> Result<(f64, f64), HazardError> {
    let temperature = data
        .get("temperature")
        .ok_or_else(|| HazardError::MissingField("temperature".to_string()))?;
    let humidity = data
        .get("humidity")
        .ok_or_else(|| HazardError::MissingField("humidity".to_string()))?;

    let temperature = validate_temperature(parse_f64(temperature)?)?;
    let humidity = validate_humidity(parse_f64(humidity)?)?;
    Ok((temperature, humidity))
}

/// Pollutant concentrations from string fields.
///
/// Keys that are not pollutant identifiers are ignored; a map without any
/// pollutant is an error.
pub fn parse_readings_from_map(data: &HashMap<String, String>) -> Result<PollutantReadings, HazardError> {
    let mut readings = PollutantReadings::new();
    for (key, raw) in data {
        let Ok(pollutant) = Pollutant::from_str(key) else {
            continue;
        };
        let value = validate_concentration(pollutant, parse_f64(raw)?)?;
        readings.insert(pollutant, value);
    }

    if readings.is_empty() {
        return Err(HazardError::NoReadings);
    }
    Ok(readings)
}
