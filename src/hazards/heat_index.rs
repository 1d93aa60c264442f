//! Heat index (apparent temperature) from air temperature and relative humidity

use crate::hazards::error::HazardError;
use crate::hazards::validation::{validate_humidity, validate_temperature};
use crate::models::{HazardColor, HeatCategory, HeatIndexResult};

struct HeatBand {
    min: f64,
    category: HeatCategory,
    color: HazardColor,
    description: &'static str,
}

/// Bands ordered from highest minimum to lowest. The last band is unbounded
/// below so classification is total.
static HEAT_INDEX_BANDS: [HeatBand; 5] = [
    HeatBand {
        min: 54.0,
        category: HeatCategory::ExtremeDanger,
        color: HazardColor::Maroon,
        description: "Heat stroke highly likely. Outdoor activities should be suspended.",
    },
    HeatBand {
        min: 41.0,
        category: HeatCategory::Danger,
        color: HazardColor::Red,
        description: "Heat cramps or heat exhaustion likely. Heat stroke possible with prolonged exposure.",
    },
    HeatBand {
        min: 32.0,
        category: HeatCategory::ExtremeCaution,
        color: HazardColor::Orange,
        description: "Heat cramps and heat exhaustion possible. Prolonged activity may lead to heat stroke.",
    },
    HeatBand {
        min: 27.0,
        category: HeatCategory::Caution,
        color: HazardColor::Yellow,
        description: "Fatigue possible with prolonged exposure and activity.",
    },
    HeatBand {
        min: f64::NEG_INFINITY,
        category: HeatCategory::Normal,
        color: HazardColor::Green,
        description: "No risk of heat-related illness under normal circumstances.",
    },
];

/// Calculate heat index in °C
///
/// Uses the Rothfusz regression, which is defined in Fahrenheit:
/// HI = -42.379 + 2.04901523 T + 10.14333127 R - 0.22475541 T R
///      - 6.83783e-3 T² - 5.481717e-2 R² + 1.22874e-3 T² R
///      + 8.5282e-4 T R² - 1.99e-6 T² R²
///
/// Inputs are not validated; see [`try_heat_index_info`] for the checked path.
pub fn compute_heat_index(temperature_celsius: f64, relative_humidity_percent: f64) -> f64 {
    let t = temperature_celsius * 9.0 / 5.0 + 32.0;
    let r = relative_humidity_percent;
    let t2 = t * t;
    let r2 = r * r;

    let hi_f = -42.379 + 2.04901523 * t + 10.14333127 * r
        - 0.22475541 * t * r
        - 6.83783e-3 * t2
        - 5.481717e-2 * r2
        + 1.22874e-3 * t2 * r
        + 8.5282e-4 * t * r2
        - 1.99e-6 * t2 * r2;

    (hi_f - 32.0) * 5.0 / 9.0
}

/// Map a heat index in °C to its hazard band (inclusive lower bounds)
pub fn classify_heat_index(heat_index_celsius: f64) -> HeatIndexResult {
    let band = HEAT_INDEX_BANDS
        .iter()
        .find(|band| heat_index_celsius >= band.min)
        .unwrap_or(&HEAT_INDEX_BANDS[HEAT_INDEX_BANDS.len() - 1]);

    HeatIndexResult {
        value: heat_index_celsius,
        category: band.category,
        color: band.color,
        description: band.description.to_string(),
    }
}

/// Compute and classify in one step
pub fn heat_index_info(temperature_celsius: f64, relative_humidity_percent: f64) -> HeatIndexResult {
    classify_heat_index(compute_heat_index(temperature_celsius, relative_humidity_percent))
}

/// Validated variant of [`heat_index_info`]
pub fn try_heat_index_info(
    temperature_celsius: f64,
    relative_humidity_percent: f64,
) -> Result<HeatIndexResult, HazardError> {
    let temperature = validate_temperature(temperature_celsius)?;
    let humidity = validate_humidity(relative_humidity_percent)?;
    Ok(heat_index_info(temperature, humidity))
}

