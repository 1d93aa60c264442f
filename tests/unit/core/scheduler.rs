//! Unit tests for the hazard scheduler

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use cron::Schedule;
use envguard::config::UpstreamConfig;
use envguard::core::scheduler::{cron_expression, Cadence, HazardScheduler};
use envguard::metrics::Metrics;
use envguard::services::HazardService;

fn service() -> Arc<HazardService> {
    let config = UpstreamConfig::with_base_url("http://127.0.0.1:9");
    Arc::new(HazardService::from_config(&config).expect("service"))
}

/// Seconds between consecutive firings of a cron expression
fn tick_gaps(expr: &str, count: usize) -> Vec<i64> {
    let schedule = Schedule::from_str(expr).unwrap();
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 7).unwrap();
    let ticks: Vec<_> = schedule.after(&start).take(count + 1).collect();
    ticks.windows(2).map(|w| (w[1] - w[0]).num_seconds()).collect()
}

#[test]
fn test_cron_expression() {
    assert_eq!(cron_expression(30).as_deref(), Some("*/30 * * * * *"));
    assert_eq!(cron_expression(300).as_deref(), Some("0 */5 * * * *"));
    assert_eq!(cron_expression(7200).as_deref(), Some("0 0 */2 * * *"));
    assert_eq!(cron_expression(86_400).as_deref(), Some("0 0 0 * * *"));
}

#[test]
fn test_cron_expression_fires_at_exact_interval() {
    for interval in [1, 15, 30, 60, 300, 900, 3600, 7200, 21_600, 86_400] {
        let expr = cron_expression(interval).unwrap();
        let gaps = tick_gaps(&expr, 4);
        assert!(
            gaps.iter().all(|&gap| gap == interval as i64),
            "interval={} expr={} gaps={:?}",
            interval,
            expr,
            gaps
        );
    }
}

#[test]
fn test_uneven_intervals_have_no_cron_expression() {
    // 45s and 90s steps would reset each minute; 5h does not divide a day
    assert_eq!(cron_expression(45), None);
    assert_eq!(cron_expression(90), None);
    assert_eq!(cron_expression(18_000), None);
    assert_eq!(cron_expression(172_800), None);
}

#[test]
fn test_cadence_for_interval() {
    assert!(matches!(Cadence::for_interval(86_400), Ok(Cadence::Cron(_))));
    assert!(matches!(
        Cadence::for_interval(45),
        Ok(Cadence::Every(period)) if period == Duration::from_secs(45)
    ));
    assert!(matches!(
        Cadence::for_interval(90),
        Ok(Cadence::Every(period)) if period == Duration::from_secs(90)
    ));
    assert!(Cadence::for_interval(0).is_err());
}

#[test]
fn test_scheduler_disabled_with_zero_interval() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let result = HazardScheduler::new(service(), metrics, vec!["Mumbai".to_string()], 0);
    assert!(result.is_err());
}

#[test]
fn test_scheduler_requires_cities() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let result = HazardScheduler::new(service(), metrics, Vec::new(), 60);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_scheduler_start_and_stop() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let scheduler = HazardScheduler::new(service(), metrics, vec!["Mumbai".to_string()], 3600).unwrap();

    assert!(matches!(scheduler.cadence(), Cadence::Cron(_)));
    assert!(!scheduler.is_running().await);
    scheduler.start().await;
    assert!(scheduler.is_running().await);
    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}

#[tokio::test]
async fn test_scheduler_with_fixed_period() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let scheduler = HazardScheduler::new(service(), metrics, vec!["Mumbai".to_string()], 90).unwrap();

    assert!(matches!(scheduler.cadence(), Cadence::Every(_)));
    scheduler.start().await;
    assert!(scheduler.is_running().await);
    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}
