//! Shared data models spanning the engine layers.

pub mod air_quality;
pub mod heat;
pub mod location;

use serde::{Deserialize, Serialize};

pub use air_quality::{AirQualityResult, AqiCategory, Pollutant, PollutantReadings};
pub use heat::{HeatCategory, HeatIndexResult};
pub use location::{Coordinates, Location};

/// Display color attached to every hazard band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
}
