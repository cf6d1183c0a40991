//! # Ledger Telemetry
//!
//! Observability for the asset ledger runtime.
//!
//! ## Components
//!
//! - Structured logging via `tracing-subscriber` (pretty or JSON, stderr)
//! - Prometheus metrics in a dedicated registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LEDGER_SERVICE_NAME` | `asset-ledger` | Service name in logs |
//! | `LEDGER_CHANNEL` | `mychannel` | Channel identifier |
//! | `LEDGER_LOG_LEVEL` | `info` | Log level filter |
//! | `LEDGER_JSON_LOGS` | `false` | JSON formatted logs |
//! | `LEDGER_CONSOLE_OUTPUT` | `true` | Emit logs at all |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};
pub use metrics::{
    gather_metrics, record_operation, register_metrics, HistogramTimer, ASSETS_LISTED,
    AUDIT_LOG_ENTRIES, LEDGER_OPERATIONS, OPERATION_DURATION,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard to hold for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first, so nothing logged during startup goes uncounted
    register_metrics()?;
    init_logging(&config)?;

    Ok(TelemetryGuard {
        service: config.full_service_name(),
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service, "Shutting down telemetry");
    }
}

/// Time a block against the latency histogram of an operation.
///
/// ```rust,ignore
/// let _timer = ledger_telemetry::time_operation!("CreateAsset");
/// ```
#[macro_export]
macro_rules! time_operation {
    ($operation:expr) => {
        $crate::metrics::HistogramTimer::for_operation($operation)
    };
}
