//! Prometheus metrics for the dashboard API.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    /// Analyses by variant and outcome (`ok`, `invalid`, `empty`).
    pub analyses_total: IntCounterVec,
    pub analysis_rows: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let analyses_total = IntCounterVec::new(
            Opts::new("analyses_total", "Analysis runs by variant and outcome"),
            &["variant", "outcome"],
        )?;
        let analysis_rows = Histogram::with_opts(
            HistogramOpts::new("analysis_rows", "Rows per analysed table").buckets(vec![
                10.0, 50.0, 100.0, 200.0, 500.0, 1_000.0, 5_000.0, 20_000.0,
            ]),
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(analysis_rows.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            analyses_total,
            analysis_rows,
        })
    }

    pub fn record_analysis(&self, variant: &str, outcome: &str) {
        self.analyses_total.with_label_values(&[variant, outcome]).inc();
    }

    /// Render all metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
