//! Upstream data sources and the hazard service built on them.

pub mod environment;
pub mod error;
pub mod geocoding;
pub mod hazard_service;
pub mod open_meteo;

pub use environment::{
    AirQualitySnapshot, EnvironmentProvider, HourlyAirQuality, HourlyWeather, LocationResolver,
    WeatherSnapshot,
};
pub use error::ServiceError;
pub use geocoding::NominatimClient;
pub use hazard_service::{AirQualitySummary, HazardService, HeatSummary};
pub use open_meteo::OpenMeteoClient;
