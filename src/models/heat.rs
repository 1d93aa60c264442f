use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::HazardColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatCategory {
    #[serde(rename = "Extreme Danger")]
    ExtremeDanger,
    Danger,
    #[serde(rename = "Extreme Caution")]
    ExtremeCaution,
    Caution,
    Normal,
}

impl HeatCategory {
    pub fn label(&self) -> &'static str {
        match self {
            HeatCategory::ExtremeDanger => "Extreme Danger",
            HeatCategory::Danger => "Danger",
            HeatCategory::ExtremeCaution => "Extreme Caution",
            HeatCategory::Caution => "Caution",
            HeatCategory::Normal => "Normal",
        }
    }
}

impl fmt::Display for HeatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Heat index in degrees Celsius with its hazard band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatIndexResult {
    pub value: f64,
    pub category: HeatCategory,
    pub color: HazardColor,
    pub description: String,
}
