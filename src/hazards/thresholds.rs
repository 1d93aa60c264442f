//! Safe-level thresholds used to flag individual pollutant exceedances

use serde::{Deserialize, Serialize};

use crate::models::{Pollutant, PollutantReadings};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantThreshold {
    pub name: &'static str,
    pub threshold: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

pub fn threshold(pollutant: Pollutant) -> PollutantThreshold {
    match pollutant {
        Pollutant::Pm25 => PollutantThreshold {
            name: "PM2.5",
            threshold: 35.5,
            unit: "μg/m³",
            description: "Fine particulate matter",
        },
        Pollutant::Pm10 => PollutantThreshold {
            name: "PM10",
            threshold: 155.0,
            unit: "μg/m³",
            description: "Coarse particulate matter",
        },
        Pollutant::No2 => PollutantThreshold {
            name: "NO₂",
            threshold: 101.0,
            unit: "μg/m³",
            description: "Nitrogen Dioxide",
        },
        Pollutant::So2 => PollutantThreshold {
            name: "SO₂",
            threshold: 76.0,
            unit: "μg/m³",
            description: "Sulfur Dioxide",
        },
        Pollutant::Co => PollutantThreshold {
            name: "CO",
            threshold: 9401.0,
            unit: "μg/m³",
            description: "Carbon Monoxide",
        },
        Pollutant::O3 => PollutantThreshold {
            name: "O₃",
            threshold: 71.0,
            unit: "μg/m³",
            description: "Ozone",
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutantWarning {
    pub pollutant: Pollutant,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub percent_above: f64,
    pub description: String,
}

/// Warnings for every reading above its safe level, in enumeration order
pub fn pollutant_warnings(readings: &PollutantReadings) -> Vec<PollutantWarning> {
    Pollutant::ALL
        .into_iter()
        .filter_map(|pollutant| {
            let value = *readings.get(&pollutant)?;
            let info = threshold(pollutant);
            if value <= 0.0 || value <= info.threshold {
                return None;
            }
            Some(PollutantWarning {
                pollutant,
                name: info.name.to_string(),
                value,
                unit: info.unit.to_string(),
                percent_above: (value - info.threshold) / info.threshold * 100.0,
                description: info.description.to_string(),
            })
        })
        .collect()
}
