// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    GEMINI_API_CALLS,
    GEMINI_API_DURATION,
    RELAY_REQUESTS_TOTAL,
    RELAY_REQUEST_DURATION,
};

/// Helper to record analyze-image request metrics
pub fn record_request(outcome: &str, duration_secs: f64) {
    RELAY_REQUESTS_TOTAL.with_label_values(&[outcome]).inc();
    RELAY_REQUEST_DURATION
        .with_label_values(&[outcome])
        .observe(duration_secs);
}

/// Helper to record Gemini API call metrics
///
/// `status_code` is `None` when the call failed before a response arrived.
pub fn record_gemini_call(status_code: Option<u16>, duration_secs: f64) {
    let status = status_code
        .map(|code| code.to_string())
        .unwrap_or_else(|| "error".to_string());

    GEMINI_API_CALLS.with_label_values(&[&status]).inc();
    GEMINI_API_DURATION
        .with_label_values(&[&status])
        .observe(duration_secs);
}
