//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Outbound provider calls (AI detection, fact check)
//! - Analysis results by outcome

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// External Service Metrics
// =============================================================================

/// External service request duration.
pub static EXTERNAL_SERVICE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "aegis_external_service_duration_seconds",
            "Duration of external service calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["service"],
    )
    .unwrap()
});

/// External service requests total.
pub static EXTERNAL_SERVICE_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "aegis_external_service_requests_total",
            "Total external service requests",
        ),
        &["service", "status"], // status: "success", "error", "not_configured"
    )
    .unwrap()
});

// =============================================================================
// Analysis Metrics
// =============================================================================

/// Analyses by outcome.
pub static ANALYSES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("aegis_analyses_total", "Total analysis requests"),
        &["outcome"], // "complete", "degraded", "rejected"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(EXTERNAL_SERVICE_DURATION.clone()),
        Box::new(EXTERNAL_SERVICE_REQUESTS.clone()),
        Box::new(ANALYSES_TOTAL.clone()),
    ]
}

/// Record a finished provider call.
pub fn record_external_call(service: &str, status: &str, elapsed_secs: Option<f64>) {
    EXTERNAL_SERVICE_REQUESTS
        .with_label_values(&[service, status])
        .inc();
    if let Some(secs) = elapsed_secs {
        EXTERNAL_SERVICE_DURATION
            .with_label_values(&[service])
            .observe(secs);
    }
}
