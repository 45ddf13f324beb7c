//! # Order Type Validation Metrics
//!
//! Prometheus metrics for monitoring save-time validation.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! order-type-validation = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `order_type_validations_total` - Counter of completed validation runs
//! - `order_type_rejections_total` - Counter of field rejections (by rule)
//! - `order_type_validation_faults_total` - Counter of runs aborted by a fault
//! - `order_type_validation_latency_seconds` - Histogram of validation times

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_counter_vec, register_histogram, register_int_counter, CounterVec, Histogram,
    IntCounter,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Completed validation runs
    pub static ref VALIDATIONS: IntCounter = register_int_counter!(
        "order_type_validations_total",
        "Total number of completed order type validation runs"
    )
    .expect("Failed to create VALIDATIONS metric");

    /// Field rejections, labeled by rule
    pub static ref REJECTIONS: CounterVec = register_counter_vec!(
        "order_type_rejections_total",
        "Total number of order type field rejections",
        &["rule"]
    )
    .expect("Failed to create REJECTIONS metric");

    /// Runs aborted by a fault
    pub static ref FAULTS: IntCounter = register_int_counter!(
        "order_type_validation_faults_total",
        "Total number of order type validation runs aborted by a fault"
    )
    .expect("Failed to create FAULTS metric");

    /// Histogram of validation latency
    pub static ref VALIDATION_LATENCY: Histogram = register_histogram!(
        "order_type_validation_latency_seconds",
        "Time taken to validate an order type in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    )
    .expect("Failed to create VALIDATION_LATENCY metric");
}

/// Record a completed validation run
#[cfg(feature = "metrics")]
pub fn record_validation() {
    VALIDATIONS.inc();
}

/// Record a rejection for `rule`
#[cfg(feature = "metrics")]
pub fn record_rejection(rule: &str) {
    REJECTIONS.with_label_values(&[rule]).inc();
}

/// Record an aborted run
#[cfg(feature = "metrics")]
pub fn record_fault() {
    FAULTS.inc();
}

/// Record validation latency
#[cfg(feature = "metrics")]
pub fn record_validation_latency(seconds: f64) {
    VALIDATION_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_validation() {}

#[cfg(not(feature = "metrics"))]
pub fn record_rejection(_rule: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_fault() {}

#[cfg(not(feature = "metrics"))]
pub fn record_validation_latency(_seconds: f64) {}
