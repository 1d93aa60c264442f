use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::hazards::error::HazardError;
use crate::models::HazardColor;

/// Pollutants with a published breakpoint table.
///
/// Declaration order is the enumeration order used for dominant-pollutant
/// tie-breaking, so `Ord` and `ALL` must stay in sync with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    Pm25,
    Pm10,
    No2,
    So2,
    Co,
    O3,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// Identifier used on the wire and as table key
    pub fn id(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::No2 => "no2",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
            Pollutant::O3 => "o3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Pollutant {
    type Err = HazardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| HazardError::UnknownPollutant(s.to_string()))
    }
}

/// Measured concentrations keyed by pollutant
pub type PollutantReadings = BTreeMap<Pollutant, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityResult {
    pub value: u32,
    pub category: AqiCategory,
    pub color: HazardColor,
    pub description: String,
    pub advice: String,
    pub dominant_pollutant: Pollutant,
    pub individual_indices: BTreeMap<Pollutant, u32>,
}
