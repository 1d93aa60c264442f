//! envguard API Server
//!
//! HTTP API exposing heat index and air quality evaluation, backed by
//! Open-Meteo and Nominatim. Stateless; can be horizontally scaled.

use dotenvy::dotenv;
use envguard::config::{self, UpstreamConfig};
use envguard::core::http::start_server;
use envguard::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port = config::get_port();
    let upstream = UpstreamConfig::from_env();

    let env = config::get_environment();
    info!("Starting envguard API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);
    info!(
        air_quality = %upstream.air_quality_url,
        weather = %upstream.weather_url,
        "Upstream endpoints"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, upstream).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
