use crate::hazards::error::HazardError;
use crate::models::{Pollutant, PollutantReadings};

fn ensure_finite(field: &str, value: f64) -> Result<f64, HazardError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HazardError::NonFinite {
            field: field.to_string(),
        })
    }
}

pub fn validate_temperature(value: f64) -> Result<f64, HazardError> {
    ensure_finite("temperature", value)
}

pub fn validate_humidity(value: f64) -> Result<f64, HazardError> {
    let value = ensure_finite("humidity", value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(HazardError::OutOfRange {
            field: "humidity".to_string(),
            value,
        });
    }
    Ok(value)
}

pub fn validate_concentration(pollutant: Pollutant, value: f64) -> Result<f64, HazardError> {
    let value = ensure_finite(pollutant.id(), value)?;
    if value < 0.0 {
        return Err(HazardError::OutOfRange {
            field: pollutant.id().to_string(),
            value,
        });
    }
    Ok(value)
}

pub fn validate_readings(readings: &PollutantReadings) -> Result<(), HazardError> {
    if readings.is_empty() {
        return Err(HazardError::NoReadings);
    }
    for (&pollutant, &value) in readings {
        validate_concentration(pollutant, value)?;
    }
    Ok(())
}
