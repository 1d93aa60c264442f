//! Orchestrates upstream fetches and the index engine

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::UpstreamConfig;
use crate::hazards::{
    compute_heat_index, try_aggregate, try_heat_index_info, validate_concentration,
    validate_humidity, validate_temperature, HazardReport,
};
use crate::models::{AirQualityResult, Coordinates, HeatIndexResult, PollutantReadings};
use crate::services::environment::{
    EnvironmentProvider, HourlyAirQuality, HourlyWeather, LocationResolver,
};
use crate::services::error::ServiceError;
use crate::services::geocoding::NominatimClient;
use crate::services::open_meteo::OpenMeteoClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualitySummary {
    pub aqi: AirQualityResult,
    pub hourly: HourlyAirQuality,
    pub location: Coordinates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatHourly {
    #[serde(flatten)]
    pub weather: HourlyWeather,
    pub heat_index: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatLocation {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub timezone: Option<String>,
    pub utc_offset: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatSummary {
    pub temperature: HeatIndexResult,
    pub hourly: HeatHourly,
    pub location: HeatLocation,
}

fn validated_readings(readings: PollutantReadings) -> Result<PollutantReadings, ServiceError> {
    for (&pollutant, &value) in &readings {
        validate_concentration(pollutant, value)?;
    }
    Ok(readings)
}

pub struct HazardService {
    environment: Arc<dyn EnvironmentProvider>,
    locations: Arc<dyn LocationResolver>,
    default_location: Coordinates,
}

impl HazardService {
    pub fn new(
        environment: Arc<dyn EnvironmentProvider>,
        locations: Arc<dyn LocationResolver>,
        default_location: Coordinates,
    ) -> Self {
        Self {
            environment,
            locations,
            default_location,
        }
    }

    /// Service backed by Open-Meteo and Nominatim
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(
            Arc::new(OpenMeteoClient::new(config)?),
            Arc::new(NominatimClient::new(config)?),
            config.default_location,
        ))
    }

    /// Explicit coordinates win; otherwise IP geolocation, then the default location
    pub async fn resolve_coordinates(&self, latitude: Option<f64>, longitude: Option<f64>) -> Coordinates {
        if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
            if latitude.is_finite() && longitude.is_finite() {
                return Coordinates::new(latitude, longitude);
            }
        }

        match self.locations.locate_by_ip().await {
            Ok(coordinates) => {
                info!(
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "Coordinates resolved from IP"
                );
                coordinates
            }
            Err(e) => {
                warn!(error = %e, "IP geolocation failed, using default location");
                self.default_location
            }
        }
    }

    pub async fn air_quality_summary(&self, coordinates: Coordinates) -> Result<AirQualitySummary, ServiceError> {
        let snapshot = self.environment.air_quality(coordinates).await?;
        let readings = snapshot.hourly.current_readings();
        if readings.is_empty() {
            return Err(ServiceError::MissingData("air quality readings".to_string()));
        }
        let aqi = try_aggregate(&readings)?;

        Ok(AirQualitySummary {
            aqi,
            hourly: snapshot.hourly,
            location: coordinates,
        })
    }

    pub async fn heat_summary(&self, coordinates: Coordinates) -> Result<HeatSummary, ServiceError> {
        let snapshot = self.environment.weather(coordinates).await?;
        let (temperature, humidity) = snapshot.hourly.current()?;
        let current = try_heat_index_info(temperature, humidity)?;

        let heat_index = snapshot
            .hourly
            .temperature
            .iter()
            .zip(&snapshot.hourly.humidity)
            .map(|pair| match pair {
                (Some(t), Some(h)) => Some(compute_heat_index(*t, *h)),
                _ => None,
            })
            .collect();

        Ok(HeatSummary {
            temperature: current,
            hourly: HeatHourly {
                weather: snapshot.hourly,
                heat_index,
            },
            location: HeatLocation {
                coordinates,
                timezone: snapshot.timezone,
                utc_offset: snapshot.utc_offset_seconds,
            },
        })
    }

    /// Geocode a city and build its combined heat and air-quality report
    pub async fn city_report(&self, city: &str) -> Result<HazardReport, ServiceError> {
        let location = self.locations.geocode(city).await?;
        let coordinates = location.coordinates;

        let (air_quality, weather) = tokio::try_join!(
            self.environment.air_quality(coordinates),
            self.environment.weather(coordinates),
        )?;

        let (temperature, humidity) = weather.hourly.current()?;
        let temperature = validate_temperature(temperature)?;
        let humidity = validate_humidity(humidity)?;
        let readings = validated_readings(air_quality.hourly.current_readings())?;

        Ok(HazardReport::build(
            location,
            temperature,
            humidity,
            &readings,
            Utc::now(),
        ))
    }
}
