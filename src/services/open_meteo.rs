//! Open-Meteo forecast and air-quality client

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::UpstreamConfig;
use crate::models::Coordinates;
use crate::services::environment::{
    AirQualitySnapshot, EnvironmentProvider, HourlyAirQuality, HourlyWeather, WeatherSnapshot,
};
use crate::services::error::ServiceError;

const AIR_QUALITY_VARIABLES: &str =
    "pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone";
const WEATHER_VARIABLES: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,dew_point_2m,wind_speed_10m,uv_index";

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    utc_offset_seconds: i32,
    hourly: AirQualityHourlyPayload,
}

#[derive(Debug, Deserialize)]
struct AirQualityHourlyPayload {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    pm10: Vec<Option<f64>>,
    #[serde(default)]
    pm2_5: Vec<Option<f64>>,
    #[serde(default)]
    carbon_monoxide: Vec<Option<f64>>,
    #[serde(default)]
    nitrogen_dioxide: Vec<Option<f64>>,
    #[serde(default)]
    sulphur_dioxide: Vec<Option<f64>>,
    #[serde(default)]
    ozone: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    utc_offset_seconds: i32,
    hourly: ForecastHourlyPayload,
}

#[derive(Debug, Deserialize)]
struct ForecastHourlyPayload {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    apparent_temperature: Vec<Option<f64>>,
    #[serde(default)]
    dew_point_2m: Vec<Option<f64>>,
    #[serde(default)]
    wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    uv_index: Vec<Option<f64>>,
}

impl From<AirQualityResponse> for AirQualitySnapshot {
    fn from(response: AirQualityResponse) -> Self {
        let hourly = response.hourly;
        Self {
            coordinates: Coordinates::new(response.latitude, response.longitude),
            timezone: response.timezone,
            utc_offset_seconds: response.utc_offset_seconds,
            hourly: HourlyAirQuality {
                time: hourly.time,
                pm25: hourly.pm2_5,
                pm10: hourly.pm10,
                no2: hourly.nitrogen_dioxide,
                so2: hourly.sulphur_dioxide,
                co: hourly.carbon_monoxide,
                o3: hourly.ozone,
            },
        }
    }
}

impl From<ForecastResponse> for WeatherSnapshot {
    fn from(response: ForecastResponse) -> Self {
        let hourly = response.hourly;
        Self {
            coordinates: Coordinates::new(response.latitude, response.longitude),
            timezone: response.timezone,
            utc_offset_seconds: response.utc_offset_seconds,
            hourly: HourlyWeather {
                time: hourly.time,
                temperature: hourly.temperature_2m,
                humidity: hourly.relative_humidity_2m,
                feels_like: hourly.apparent_temperature,
                dew_point: hourly.dew_point_2m,
                wind_speed: hourly.wind_speed_10m,
                uv_index: hourly.uv_index,
            },
        }
    }
}

pub struct OpenMeteoClient {
    http: reqwest::Client,
    air_quality_url: String,
    weather_url: String,
    max_retries: usize,
    retry_min_delay: Duration,
}

impl OpenMeteoClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: &UpstreamConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            air_quality_url: config.air_quality_url.clone(),
            weather_url: config.weather_url.clone(),
            max_retries: config.max_retries,
            retry_min_delay: config.retry_min_delay,
        }
    }

    fn request_url(base: &str, coordinates: Coordinates, hourly: &str) -> Result<Url, ServiceError> {
        let url = Url::parse_with_params(
            base,
            &[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("hourly", hourly.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "1".to_string()),
            ],
        )?;
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ServiceError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, ServiceError> {
        debug!(url = %url, "Fetching Open-Meteo data");
        (|| self.get_json::<T>(&url))
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(self.retry_min_delay)
                    .with_max_times(self.max_retries),
            )
            .when(ServiceError::is_transient)
            .notify(|err, delay| {
                warn!(error = %err, delay_ms = delay.as_millis() as u64, "Retrying Open-Meteo request");
            })
            .await
    }
}

#[async_trait]
impl EnvironmentProvider for OpenMeteoClient {
    async fn air_quality(&self, coordinates: Coordinates) -> Result<AirQualitySnapshot, ServiceError> {
        let url = Self::request_url(&self.air_quality_url, coordinates, AIR_QUALITY_VARIABLES)?;
        let response: AirQualityResponse = self.fetch(url).await?;
        Ok(response.into())
    }

    async fn weather(&self, coordinates: Coordinates) -> Result<WeatherSnapshot, ServiceError> {
        let url = Self::request_url(&self.weather_url, coordinates, WEATHER_VARIABLES)?;
        let response: ForecastResponse = self.fetch(url).await?;
        Ok(response.into())
    }
}
