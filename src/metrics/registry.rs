// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use crate::error::{RelayError, Result};
use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    Encoder, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // RELAY METRICS
    // ============================================================================

    /// Total analyze-image requests by outcome
    pub static ref RELAY_REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("relay_requests_total", "Total analyze-image requests"),
        &["outcome"], // outcome: success, invalid_request, unconfigured, upstream_error
        REGISTRY
    ).unwrap();

    /// Analyze-image request duration histogram
    pub static ref RELAY_REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("relay_request_duration_seconds", "Analyze-image request duration in seconds")
            .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["outcome"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // GEMINI API METRICS
    // ============================================================================

    /// Total Gemini API calls. Transport failures are recorded with status "error".
    pub static ref GEMINI_API_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("gemini_api_calls_total", "Total Gemini API calls"),
        &["status_code"],
        REGISTRY
    ).unwrap();

    /// Gemini API call duration
    pub static ref GEMINI_API_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("gemini_api_duration_seconds", "Gemini API call duration")
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["status_code"],
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| RelayError::Internal(format!("Failed to encode metrics: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| RelayError::Internal(format!("Metrics output is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        // Label sets only show up once they have been touched
        RELAY_REQUESTS_TOTAL.with_label_values(&["success"]).inc_by(0.0);
        GEMINI_API_CALLS.with_label_values(&["200"]).inc_by(0.0);

        let metrics = gather_metrics().unwrap();
        assert!(metrics.contains("relay_requests_total"));
        assert!(metrics.contains("gemini_api_calls_total"));
    }
}
