//! Prometheus metrics shared by the HTTP layer and the monitor

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub hazard_evaluations_total: IntCounterVec,
    pub upstream_errors_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let hazard_evaluations_total = IntCounterVec::new(
            Opts::new("hazard_evaluations_total", "Hazard index evaluations by kind"),
            &["kind"],
        )?;
        let upstream_errors_total = IntCounterVec::new(
            Opts::new("upstream_errors_total", "Failed upstream API calls by source"),
            &["source"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(hazard_evaluations_total.clone()))?;
        registry.register(Box::new(upstream_errors_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            hazard_evaluations_total,
            upstream_errors_total,
        })
    }

    pub fn record_evaluation(&self, kind: &str) {
        self.hazard_evaluations_total.with_label_values(&[kind]).inc();
    }

    pub fn record_upstream_error(&self, source: &str) {
        self.upstream_errors_total.with_label_values(&[source]).inc();
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
