//! Combined heat and air-quality hazard report for a location

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hazards::air_quality::aggregate;
use crate::hazards::heat_index::heat_index_info;
use crate::hazards::thresholds::{pollutant_warnings, PollutantWarning};
use crate::models::{AirQualityResult, HeatIndexResult, Location, PollutantReadings};

/// Heat index (°C) from which heat precautions are recommended
pub const HEAT_PRECAUTION_THRESHOLD: f64 = 32.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardReport {
    pub location: Location,
    pub generated_at: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: f64,
    pub heat_index: HeatIndexResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<AirQualityResult>,
    #[serde(default)]
    pub warnings: Vec<PollutantWarning>,
    pub recommendations: Vec<String>,
}

impl HazardReport {
    pub fn build(
        location: Location,
        temperature: f64,
        humidity: f64,
        readings: &PollutantReadings,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let heat_index = heat_index_info(temperature, humidity);
        let warnings = pollutant_warnings(readings);
        let recommendations = recommendations(&heat_index, &warnings);

        Self {
            location,
            generated_at,
            temperature,
            humidity,
            heat_index,
            air_quality: aggregate(readings),
            warnings,
            recommendations,
        }
    }

    /// True when either the heat band or any pollutant calls for precautions
    pub fn has_hazards(&self) -> bool {
        self.heat_index.value >= HEAT_PRECAUTION_THRESHOLD || !self.warnings.is_empty()
    }

    /// Plain-text rendering suitable for chat or log delivery
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HazardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coords = self.location.coordinates;

        writeln!(f, "Environmental Hazards Report")?;
        writeln!(f, "Location: {}", self.location.short_name())?;
        writeln!(f, "{}", self.generated_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(f)?;

        writeln!(f, "Heat Wave Status:")?;
        writeln!(f, "- Temperature: {:.1}°C", self.temperature)?;
        writeln!(f, "- Humidity: {:.1}%", self.humidity)?;
        writeln!(f, "- Heat Index: {:.1}°C", self.heat_index.value)?;
        writeln!(f, "- Status: {}", self.heat_index.category)?;
        writeln!(f, "- {}", self.heat_index.description)?;
        writeln!(f)?;

        if let Some(aqi) = &self.air_quality {
            writeln!(
                f,
                "Air Quality Index: {} ({}, dominant {})",
                aqi.value,
                aqi.category,
                aqi.dominant_pollutant.id().to_uppercase()
            )?;
        }

        if self.warnings.is_empty() {
            writeln!(f, "Air quality is currently within safe limits.")?;
        } else {
            writeln!(f, "Air Quality Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "- {} ({})", warning.name, warning.description)?;
                writeln!(f, "  Current: {:.1}{}", warning.value, warning.unit)?;
                writeln!(f, "  {:.1}% above safe level", warning.percent_above)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Safety Recommendations:")?;
        for recommendation in &self.recommendations {
            writeln!(f, "- {}", recommendation)?;
        }
        writeln!(f)?;

        write!(f, "Coordinates: {:.4}, {:.4}", coords.latitude, coords.longitude)
    }
}

pub fn recommendations(heat_index: &HeatIndexResult, warnings: &[PollutantWarning]) -> Vec<String> {
    let hot = heat_index.value >= HEAT_PRECAUTION_THRESHOLD;
    let polluted = !warnings.is_empty();

    if !hot && !polluted {
        return vec!["No special precautions needed at this time".to_string()];
    }

    let mut advice = vec!["Limit outdoor activities"];
    if polluted {
        advice.extend([
            "Wear N95/KN95 masks outdoors",
            "Keep windows closed",
            "Use air purifiers if available",
        ]);
    }
    if hot {
        advice.extend([
            "Stay hydrated",
            "Seek air-conditioned environments",
            "Wear light, loose-fitting clothing",
        ]);
    }
    advice.into_iter().map(String::from).collect()
}
