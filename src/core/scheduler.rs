//! Cron-based scheduler for periodic city hazard evaluation

use crate::metrics::Metrics;
use crate::services::HazardService;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info, warn};

/// Cron expression that fires exactly every `interval_seconds`, if one exists.
///
/// Step fields reset at the top of their parent field, so only intervals that
/// divide a minute, an hour or a day evenly have an exact expression.
pub fn cron_expression(interval_seconds: u64) -> Option<String> {
    // second minute hour day month weekday
    match interval_seconds {
        0 => None,
        s if s < 60 && 60 % s == 0 => Some(format!("*/{} * * * * *", s)),
        s if s < 3600 && s % 60 == 0 && 60 % (s / 60) == 0 => {
            Some(format!("0 */{} * * * *", s / 60))
        }
        s if s < 86_400 && s % 3600 == 0 && 24 % (s / 3600) == 0 => {
            Some(format!("0 0 */{} * * *", s / 3600))
        }
        86_400 => Some("0 0 0 * * *".to_string()),
        _ => None,
    }
}

/// When the scheduler fires
#[derive(Debug, Clone)]
pub enum Cadence {
    /// Wall-clock aligned
    Cron(Schedule),
    /// Fixed period from start, for intervals with no exact cron expression
    Every(Duration),
}

impl Cadence {
    pub fn for_interval(interval_seconds: u64) -> Result<Self, String> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".to_string());
        }
        match cron_expression(interval_seconds) {
            Some(expr) => Schedule::from_str(&expr)
                .map(Cadence::Cron)
                .map_err(|e| format!("Invalid cron expression '{}': {}", expr, e)),
            None => Ok(Cadence::Every(Duration::from_secs(interval_seconds))),
        }
    }
}

/// Scheduler that periodically builds a hazard report for each city
pub struct HazardScheduler {
    service: Arc<HazardService>,
    metrics: Arc<Metrics>,
    cities: Vec<String>,
    cadence: Cadence,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl HazardScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `service` - Hazard service used to build reports
    /// * `cities` - City names to evaluate on every tick
    /// * `interval_seconds` - Evaluation interval in seconds (0 = disabled)
    pub fn new(
        service: Arc<HazardService>,
        metrics: Arc<Metrics>,
        cities: Vec<String>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if cities.is_empty() {
            return Err("Scheduler has no cities to monitor".into());
        }
        let cadence = Cadence::for_interval(interval_seconds)?;

        info!(
            interval = interval_seconds,
            cadence = ?cadence,
            cities = ?cities,
            "HazardScheduler: created with interval {}s",
            interval_seconds
        );

        Ok(Self {
            service,
            metrics,
            cities,
            cadence,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Build and log a report for every configured city once
    pub async fn evaluate_all(service: &HazardService, metrics: &Metrics, cities: &[String]) {
        for city in cities {
            match service.city_report(city).await {
                Ok(report) => {
                    metrics.record_evaluation("hazard_report");
                    let aqi = report.air_quality.as_ref().map(|a| a.value);
                    if report.has_hazards() {
                        warn!(
                            city = %city,
                            heat_index = report.heat_index.value,
                            heat_category = %report.heat_index.category,
                            aqi = ?aqi,
                            warnings = report.warnings.len(),
                            "HazardScheduler: hazards detected\n{}",
                            report.render_text()
                        );
                    } else {
                        info!(
                            city = %city,
                            heat_index = report.heat_index.value,
                            aqi = ?aqi,
                            "HazardScheduler: conditions normal"
                        );
                    }
                }
                Err(e) => {
                    metrics.record_upstream_error("hazard_report");
                    error!(city = %city, error = %e, "HazardScheduler: failed to evaluate {}", city);
                }
            }
        }
    }

    async fn tick(service: &HazardService, metrics: &Metrics, cities: &[String]) {
        info!(
            city_count = cities.len(),
            "HazardScheduler: tick, evaluating {} cities",
            cities.len()
        );
        Self::evaluate_all(service, metrics, cities).await;
    }

    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    /// Start the scheduler
    pub async fn start(&self) {
        let service = self.service.clone();
        let metrics = self.metrics.clone();
        let cities = self.cities.clone();
        let cadence = self.cadence.clone();

        let handle = tokio::spawn(async move {
            info!("HazardScheduler: started, waiting for first tick...");

            match cadence {
                Cadence::Cron(schedule) => loop {
                    match schedule.upcoming(chrono::Utc).next() {
                        Some(next_tick) => {
                            let now = chrono::Utc::now();
                            if next_tick > now {
                                let duration = (next_tick - now).to_std().unwrap_or_default();
                                tokio::time::sleep(duration).await;
                            }
                        }
                        None => {
                            tokio::time::sleep(Duration::from_secs(60)).await;
                            continue;
                        }
                    }
                    Self::tick(&service, &metrics, &cities).await;
                },
                Cadence::Every(period) => {
                    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    loop {
                        ticker.tick().await;
                        Self::tick(&service, &metrics, &cities).await;
                    }
                }
            }
        });

        *self.handle.write().await = Some(handle);
        info!("HazardScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("HazardScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
