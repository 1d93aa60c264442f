//! Environment-driven configuration

use std::env;
use std::time::Duration;

use crate::models::Coordinates;

pub const DEFAULT_AIR_QUALITY_API_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_GEOCODING_API_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_IP_LOCATION_API_URL: &str = "http://ip-api.com/json/";

/// Mumbai, used when no location can be resolved
pub const DEFAULT_LOCATION: Coordinates = Coordinates {
    latitude: 19.0728,
    longitude: 72.8826,
};

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Deployment environment name (`ENVIRONMENT`, defaults to "sandbox")
pub fn get_environment() -> String {
    var_or("ENVIRONMENT", "sandbox").to_lowercase()
}

/// Base log level when `RUST_LOG` is unset (`LOG_LEVEL`, defaults to "info")
pub fn get_log_level() -> String {
    var_or("LOG_LEVEL", "info").to_lowercase()
}

/// Explicit log format override (`LOG_FORMAT`)
pub fn get_log_format() -> Option<String> {
    env::var("LOG_FORMAT").ok().filter(|v| !v.trim().is_empty())
}

pub fn get_port() -> u16 {
    parsed_or("PORT", 8080)
}

/// Upstream endpoints and request policy
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub air_quality_url: String,
    pub weather_url: String,
    pub geocoding_url: String,
    pub ip_location_url: String,
    pub geocoding_country: String,
    pub geocoding_country_codes: String,
    pub default_location: Coordinates,
    pub timeout: Duration,
    pub max_retries: usize,
    /// First backoff delay; doubles on each retry
    pub retry_min_delay: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            air_quality_url: DEFAULT_AIR_QUALITY_API_URL.to_string(),
            weather_url: DEFAULT_WEATHER_API_URL.to_string(),
            geocoding_url: DEFAULT_GEOCODING_API_URL.to_string(),
            ip_location_url: DEFAULT_IP_LOCATION_API_URL.to_string(),
            geocoding_country: "India".to_string(),
            geocoding_country_codes: "in".to_string(),
            default_location: DEFAULT_LOCATION,
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_min_delay: Duration::from_secs(1),
        }
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            air_quality_url: var_or("AIR_QUALITY_API_URL", &defaults.air_quality_url),
            weather_url: var_or("WEATHER_API_URL", &defaults.weather_url),
            geocoding_url: var_or("GEOCODING_API_URL", &defaults.geocoding_url),
            ip_location_url: var_or("IP_LOCATION_API_URL", &defaults.ip_location_url),
            geocoding_country: var_or("GEOCODING_COUNTRY", &defaults.geocoding_country),
            geocoding_country_codes: var_or("GEOCODING_COUNTRY_CODES", &defaults.geocoding_country_codes),
            default_location: Coordinates::new(
                parsed_or("DEFAULT_LATITUDE", DEFAULT_LOCATION.latitude),
                parsed_or("DEFAULT_LONGITUDE", DEFAULT_LOCATION.longitude),
            ),
            timeout: Duration::from_secs(parsed_or("HTTP_TIMEOUT_SECONDS", 10)),
            max_retries: parsed_or("UPSTREAM_MAX_RETRIES", defaults.max_retries),
            retry_min_delay: Duration::from_millis(parsed_or("UPSTREAM_RETRY_DELAY_MS", 1000)),
        }
    }

    /// Point every upstream at a single base URL (used by tests against a mock server)
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            air_quality_url: format!("{}/v1/air-quality", base),
            weather_url: format!("{}/v1/forecast", base),
            geocoding_url: base.to_string(),
            ip_location_url: format!("{}/json/", base),
            max_retries: 0,
            retry_min_delay: Duration::from_millis(10),
            ..Self::default()
        }
    }
}

/// Periodic hazard monitor settings
#[derive(Debug, Clone, Default)]
pub struct MonitorConfig {
    /// Seconds between evaluations (0 = disabled)
    pub interval_seconds: u64,
    pub cities: Vec<String>,
}

impl MonitorConfig {
    pub fn from_env() -> Self {
        let cities = env::var("MONITOR_CITIES")
            .map(|s| parse_city_list(&s))
            .unwrap_or_default();
        Self {
            interval_seconds: parsed_or("MONITOR_INTERVAL_SECONDS", 0),
            cities,
        }
    }
}

pub fn parse_city_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}
