//! # EMR Telemetry
//!
//! Structured logging for the EMR validation core, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use emr_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::for_subsystem("order-types");
//! let _guard = init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `EMR_SERVICE_NAME` | `emr-core` | Service name in logs |
//! | `EMR_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `EMR_CONSOLE_OUTPUT` | `true` | Write logs to the console |
//! | `EMR_JSON_LOGS` | `false` | JSON log lines (defaults on inside containers) |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience macro for creating a span with subsystem context.
///
/// # Example
///
/// ```rust,ignore
/// use emr_telemetry::subsystem_span;
///
/// let _span = subsystem_span!("validate", subsystem = "order-types").entered();
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
