//! City geocoding (Nominatim) and IP-based geolocation

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::UpstreamConfig;
use crate::models::{Coordinates, Location};
use crate::services::environment::LocationResolver;
use crate::services::error::ServiceError;

const USER_AGENT: &str = concat!("envguard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct IpLocationResponse {
    #[serde(default)]
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

pub struct NominatimClient {
    http: reqwest::Client,
    search_url: String,
    ip_location_url: String,
    country: String,
    country_codes: String,
}

impl NominatimClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: &UpstreamConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            search_url: format!("{}/search", config.geocoding_url.trim_end_matches('/')),
            ip_location_url: config.ip_location_url.clone(),
            country: config.geocoding_country.clone(),
            country_codes: config.geocoding_country_codes.clone(),
        }
    }

    fn search_query(&self, city: &str) -> String {
        if self.country.is_empty() {
            city.to_string()
        } else {
            format!("{}, {}", city, self.country)
        }
    }
}

fn parse_coordinate(field: &str, raw: &str) -> Result<f64, ServiceError> {
    raw.parse::<f64>()
        .map_err(|_| ServiceError::InvalidResponse(format!("{} is not a number: {}", field, raw)))
}

#[async_trait]
impl LocationResolver for NominatimClient {
    async fn geocode(&self, city: &str) -> Result<Location, ServiceError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ServiceError::LocationNotFound(String::new()));
        }

        let mut params = vec![
            ("q", self.search_query(city)),
            ("format", "json".to_string()),
            ("limit", "1".to_string()),
        ];
        if !self.country_codes.is_empty() {
            params.push(("countrycodes", self.country_codes.clone()));
        }
        let url = Url::parse_with_params(&self.search_url, &params)?;
        debug!(city = %city, "Geocoding city");

        let places: Vec<NominatimPlace> = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::LocationNotFound(city.to_string()))?;

        let coordinates = Coordinates::new(
            parse_coordinate("lat", &place.lat)?,
            parse_coordinate("lon", &place.lon)?,
        );
        Ok(Location::new(coordinates, place.display_name))
    }

    async fn locate_by_ip(&self) -> Result<Coordinates, ServiceError> {
        let response: IpLocationResponse = self
            .http
            .get(&self.ip_location_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (response.status.as_str(), response.lat, response.lon) {
            ("success", Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            (status, _, _) => Err(ServiceError::InvalidResponse(format!(
                "IP geolocation status: {}",
                status
            ))),
        }
    }
}
