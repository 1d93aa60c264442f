//! Environmental data provider interface and the snapshots it returns

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, Location, Pollutant, PollutantReadings};
use crate::services::error::ServiceError;

/// Hourly pollutant series (μg/m³). Missing samples are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyAirQuality {
    pub time: Vec<String>,
    pub pm25: Vec<Option<f64>>,
    pub pm10: Vec<Option<f64>>,
    pub no2: Vec<Option<f64>>,
    pub so2: Vec<Option<f64>>,
    pub co: Vec<Option<f64>>,
    pub o3: Vec<Option<f64>>,
}

impl HourlyAirQuality {
    pub fn series(&self, pollutant: Pollutant) -> &[Option<f64>] {
        match pollutant {
            Pollutant::Pm25 => &self.pm25,
            Pollutant::Pm10 => &self.pm10,
            Pollutant::No2 => &self.no2,
            Pollutant::So2 => &self.so2,
            Pollutant::Co => &self.co,
            Pollutant::O3 => &self.o3,
        }
    }

    /// First hourly sample of every pollutant that has one
    pub fn current_readings(&self) -> PollutantReadings {
        Pollutant::ALL
            .into_iter()
            .filter_map(|p| {
                let value = self.series(p).first().copied().flatten()?;
                Some((p, value))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyWeather {
    pub time: Vec<String>,
    pub temperature: Vec<Option<f64>>,
    pub humidity: Vec<Option<f64>>,
    pub feels_like: Vec<Option<f64>>,
    pub dew_point: Vec<Option<f64>>,
    pub wind_speed: Vec<Option<f64>>,
    pub uv_index: Vec<Option<f64>>,
}

impl HourlyWeather {
    /// First hourly temperature (°C) and relative humidity (%)
    pub fn current(&self) -> Result<(f64, f64), ServiceError> {
        let temperature = self
            .temperature
            .first()
            .copied()
            .flatten()
            .ok_or_else(|| ServiceError::MissingData("temperature_2m".to_string()))?;
        let humidity = self
            .humidity
            .first()
            .copied()
            .flatten()
            .ok_or_else(|| ServiceError::MissingData("relative_humidity_2m".to_string()))?;
        Ok((temperature, humidity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualitySnapshot {
    pub coordinates: Coordinates,
    pub timezone: Option<String>,
    pub utc_offset_seconds: i32,
    pub hourly: HourlyAirQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub coordinates: Coordinates,
    pub timezone: Option<String>,
    pub utc_offset_seconds: i32,
    pub hourly: HourlyWeather,
}

#[async_trait]
pub trait EnvironmentProvider: Send + Sync {
    async fn air_quality(&self, coordinates: Coordinates) -> Result<AirQualitySnapshot, ServiceError>;

    async fn weather(&self, coordinates: Coordinates) -> Result<WeatherSnapshot, ServiceError>;
}

#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolve a free-text city name
    async fn geocode(&self, city: &str) -> Result<Location, ServiceError>;

    /// Approximate coordinates of the calling host
    async fn locate_by_ip(&self) -> Result<Coordinates, ServiceError>;
}
