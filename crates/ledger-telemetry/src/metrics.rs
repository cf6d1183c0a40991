//! Prometheus metrics for the asset ledger.
//!
//! All metrics follow the naming convention: `ledger_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: invocations by function and outcome
//! - **Gauge**: audit log length, size of the last listing
//! - **Histogram**: invocation latency by function

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, CounterVec, Encoder, Gauge, Histogram, HistogramOpts, HistogramVec, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Invocations by function name and outcome (success / error kind)
    pub static ref LEDGER_OPERATIONS: CounterVec = CounterVec::new(
        Opts::new("ledger_operations_total", "Contract invocations by function and outcome"),
        &["operation", "outcome"]
    ).expect("metric creation failed");

    /// Invocation latency
    pub static ref OPERATION_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "ledger_operation_duration_seconds",
            "Time spent executing a contract invocation"
        ).buckets(exponential_buckets(0.00001, 2.0, 16).expect("valid bucket layout")),
        &["operation"]
    ).expect("metric creation failed");

    /// Current audit log length
    pub static ref AUDIT_LOG_ENTRIES: Gauge = Gauge::new(
        "ledger_audit_log_entries",
        "Number of entries in the in-memory audit log"
    ).expect("metric creation failed");

    /// Entries returned by the most recent full listing
    pub static ref ASSETS_LISTED: Gauge = Gauge::new(
        "ledger_assets_listed",
        "Number of world-state entries returned by the last GetAllAssets"
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(LEDGER_OPERATIONS.clone()),
        Box::new(OPERATION_DURATION.clone()),
        Box::new(AUDIT_LOG_ENTRIES.clone()),
        Box::new(ASSETS_LISTED.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Count one invocation.
pub fn record_operation(operation: &str, outcome: &str) {
    LEDGER_OPERATIONS.with_label_values(&[operation, outcome]).inc();
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }

    /// Timer on the latency histogram of `operation`.
    pub fn for_operation(operation: &str) -> Self {
        Self::new(&OPERATION_DURATION.with_label_values(&[operation]))
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}
