use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A resolved place, as returned by the geocoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub coordinates: Coordinates,
    pub display_name: String,
}

impl Location {
    pub fn new(coordinates: Coordinates, display_name: impl Into<String>) -> Self {
        Self {
            coordinates,
            display_name: display_name.into(),
        }
    }

    /// First component of the display name ("Mumbai, Mumbai Suburban, ..." -> "Mumbai")
    pub fn short_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }
}
