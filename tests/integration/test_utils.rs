//! Shared upstream mocks for integration tests

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub async fn mock_air_quality(server: &MockServer) {
    let response = json!({
        "latitude": 19.076,
        "longitude": 72.8777,
        "timezone": "Asia/Kolkata",
        "utc_offset_seconds": 19800,
        "hourly": {
            "time": ["2024-06-01T00:00", "2024-06-01T01:00"],
            "pm10": [60.0, 58.0],
            "pm2_5": [40.0, 38.0],
            "carbon_monoxide": [300.0, 310.0],
            "nitrogen_dioxide": [20.0, null],
            "sulphur_dioxide": [5.0, 6.0],
            "ozone": [30.0, 35.0]
        }
    });

    Mock::given(method("GET"))
        .and(path("/v1/air-quality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

pub async fn mock_weather(server: &MockServer) {
    let response = json!({
        "latitude": 19.076,
        "longitude": 72.8777,
        "timezone": "Asia/Kolkata",
        "utc_offset_seconds": 19800,
        "hourly": {
            "time": ["2024-06-01T00:00", "2024-06-01T01:00"],
            "temperature_2m": [35.0, 34.0],
            "relative_humidity_2m": [70.0, null],
            "apparent_temperature": [44.1, 42.0],
            "dew_point_2m": [28.7, 27.9],
            "wind_speed_10m": [12.0, 10.5],
            "uv_index": [0.0, 0.0]
        }
    });

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

pub async fn mock_geocoding(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Mumbai, India"))
        .and(query_param("countrycodes", "in"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "19.0760",
            "lon": "72.8777",
            "display_name": "Mumbai, Mumbai Suburban, Maharashtra, India"
        }])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Atlantis, India"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

pub async fn mock_ip_location(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "lat": 28.61,
            "lon": 77.2
        })))
        .mount(server)
        .await;
}

/// Mock server answering every upstream the service talks to
pub async fn mock_upstreams() -> MockServer {
    let server = MockServer::start().await;
    mock_air_quality(&server).await;
    mock_weather(&server).await;
    mock_geocoding(&server).await;
    mock_ip_location(&server).await;
    server
}
