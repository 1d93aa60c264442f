//! envguard hazard monitor
//!
//! Periodically evaluates heat and air-quality hazards for the cities in
//! MONITOR_CITIES and logs a report for each.

use std::sync::Arc;

use dotenvy::dotenv;
use envguard::config::{self, MonitorConfig, UpstreamConfig};
use envguard::core::scheduler::HazardScheduler;
use envguard::logging;
use envguard::metrics::Metrics;
use envguard::services::HazardService;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let monitor = MonitorConfig::from_env();
    let upstream = UpstreamConfig::from_env();

    info!("Starting envguard hazard monitor");
    info!(environment = %config::get_environment(), "Environment");
    info!(cities = ?monitor.cities, interval = monitor.interval_seconds, "Monitor configuration");

    let service = Arc::new(HazardService::from_config(&upstream)?);
    let metrics = Arc::new(Metrics::new()?);

    if monitor.cities.is_empty() {
        return Err("MONITOR_CITIES is required".into());
    }

    if monitor.interval_seconds == 0 {
        info!("MONITOR_INTERVAL_SECONDS not set, running a single evaluation");
        HazardScheduler::evaluate_all(&service, &metrics, &monitor.cities).await;
        return Ok(());
    }

    let scheduler = HazardScheduler::new(
        service,
        metrics,
        monitor.cities,
        monitor.interval_seconds,
    )?;
    scheduler.start().await;

    signal::ctrl_c().await?;
    info!("Shutting down hazard monitor...");
    scheduler.stop().await;

    Ok(())
}
