//! Air quality index aggregation over pollutant sub-indices

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use tracing::debug;

use crate::hazards::breakpoints::{breakpoints, INDEX_CEILING};
use crate::hazards::error::HazardError;
use crate::hazards::validation::validate_readings;
use crate::models::{AirQualityResult, AqiCategory, HazardColor, Pollutant, PollutantReadings};

/// Sub-index for a pollutant given by identifier.
///
/// Unrecognized identifiers yield 0.
pub fn compute_individual_index(concentration: f64, pollutant_id: &str) -> u32 {
    match Pollutant::from_str(pollutant_id) {
        Ok(pollutant) => compute_pollutant_index(concentration, pollutant),
        Err(_) => 0,
    }
}

/// Sub-index by piecewise-linear interpolation over the pollutant's table
///
/// index = round((Ih - Il) / (Ch - Cl) * (C - Cl) + Il)
///
/// A concentration that falls between two bands is reported at the lower
/// band's upper index. Negative values clamp to the first band, and anything
/// past the last band (or NaN) saturates at 500.
///
/// Unlike the legacy service, gap and negative values do not saturate to 500.
pub fn compute_pollutant_index(concentration: f64, pollutant: Pollutant) -> u32 {
    let table = breakpoints(pollutant);

    let mut previous = None;
    for bp in table {
        if bp.contains(concentration) {
            return bp.interpolate(concentration);
        }
        if concentration < bp.concentration_low {
            return match previous {
                Some(prev) => prev,
                None => bp.index_low,
            };
        }
        previous = Some(bp.index_high);
    }

    INDEX_CEILING
}

/// Category, color, description and advice for an overall index
pub fn aqi_info(value: u32, dominant: Pollutant) -> (AqiCategory, HazardColor, String, String) {
    match value {
        0..=50 => (
            AqiCategory::Good,
            HazardColor::Green,
            "Air quality is satisfactory, and air pollution poses little or no risk.".to_string(),
            "Perfect for outdoor activities!".to_string(),
        ),
        51..=100 => (
            AqiCategory::Moderate,
            HazardColor::Yellow,
            "Air quality is acceptable. However, there may be a risk for some people.".to_string(),
            "Sensitive individuals should consider reducing prolonged outdoor exertion.".to_string(),
        ),
        101..=150 => (
            AqiCategory::UnhealthyForSensitiveGroups,
            HazardColor::Orange,
            format!(
                "High levels of {}. Sensitive groups may experience health effects.",
                dominant.id().to_uppercase()
            ),
            "People with respiratory or heart conditions should limit outdoor exposure.".to_string(),
        ),
        151..=200 => (
            AqiCategory::Unhealthy,
            HazardColor::Red,
            "Everyone may begin to experience health effects.".to_string(),
            "Everyone should reduce prolonged outdoor exposure.".to_string(),
        ),
        201..=300 => (
            AqiCategory::VeryUnhealthy,
            HazardColor::Purple,
            "Health alert: everyone may experience more serious health effects.".to_string(),
            "Avoid outdoor activities. Stay indoors if possible.".to_string(),
        ),
        _ => (
            AqiCategory::Hazardous,
            HazardColor::Maroon,
            "Health warnings of emergency conditions.".to_string(),
            "Everyone should avoid all outdoor exertion.".to_string(),
        ),
    }
}

/// Overall index across all supplied pollutants.
///
/// The overall value is the worst sub-index. Ties on the dominant pollutant go
/// to the first one in [`Pollutant::ALL`] order. Returns `None` when no
/// readings are supplied.
pub fn aggregate(readings: &PollutantReadings) -> Option<AirQualityResult> {
    let mut individual_indices = BTreeMap::new();
    let mut dominant: Option<(Pollutant, u32)> = None;

    for pollutant in Pollutant::ALL {
        let Some(&concentration) = readings.get(&pollutant) else {
            continue;
        };
        let index = compute_pollutant_index(concentration, pollutant);
        individual_indices.insert(pollutant, index);

        match dominant {
            Some((_, max)) if index <= max => {}
            _ => dominant = Some((pollutant, index)),
        }
    }

    let (dominant_pollutant, value) = dominant?;
    let (category, color, description, advice) = aqi_info(value, dominant_pollutant);

    Some(AirQualityResult {
        value,
        category,
        color,
        description,
        advice,
        dominant_pollutant,
        individual_indices,
    })
}

/// Validated variant of [`aggregate`]
pub fn try_aggregate(readings: &PollutantReadings) -> Result<AirQualityResult, HazardError> {
    validate_readings(readings)?;
    aggregate(readings).ok_or(HazardError::NoReadings)
}

/// String-keyed entry point; unrecognized identifiers are skipped
pub fn aggregate_named(concentrations: &HashMap<String, f64>) -> Option<AirQualityResult> {
    let mut readings = PollutantReadings::new();
    for (id, &value) in concentrations {
        match Pollutant::from_str(id) {
            Ok(pollutant) => {
                readings.insert(pollutant, value);
            }
            Err(_) => debug!(pollutant = %id, "Skipping unrecognized pollutant"),
        }
    }
    aggregate(&readings)
}
