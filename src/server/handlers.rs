// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::RelayError;
use crate::metrics;
use crate::models::gemini::OpaquePayload;
use crate::vision::{build_generate_request, parse_analyze_request};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

/// Local readiness only; the upstream API is never contacted from here.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    let credentials_check = if state.gemini_client.is_configured() {
        HealthCheck {
            status: "ok".to_string(),
            message: "Gemini API key configured".to_string(),
        }
    } else {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "error".to_string(),
            message: "Gemini API key missing or placeholder".to_string(),
        }
    };
    checks.insert("gemini_credentials".to_string(), credentials_check);

    let config_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "API url: {}, timeout: {}s",
            state.gemini_client.api_url(),
            state.config.gemini.timeout_seconds
        ),
    };
    checks.insert("configuration".to_string(), config_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `POST /analyze-image`
///
/// The credential check runs before the body is looked at, so an
/// unconfigured server answers every request with the configuration error.
pub async fn analyze_image_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, RelayError> {
    let start = Instant::now();
    let result = relay_image(&state, &body).await;

    let outcome = match &result {
        Ok(_) => "success",
        Err(RelayError::InvalidRequest(_)) => "invalid_request",
        Err(RelayError::Config(_)) => "unconfigured",
        Err(_) => "upstream_error",
    };
    metrics::record_request(outcome, start.elapsed().as_secs_f64());

    if let Err(e) = &result {
        warn!("analyze-image failed ({}): {}", outcome, e);
    }

    result.map(IntoResponse::into_response)
}

async fn relay_image(state: &AppState, body: &[u8]) -> Result<OpaquePayload, RelayError> {
    if !state.gemini_client.is_configured() {
        return Err(RelayError::Config(
            "Gemini API key is missing or still the placeholder".to_string(),
        ));
    }

    let request = parse_analyze_request(body)?;
    info!(
        "Received analyze-image request: mime_type={}, image_data={} chars",
        request.mime_type,
        request.image_data.len()
    );

    let gemini_request = build_generate_request(&request);
    debug!("Built Gemini request");

    state.gemini_client.generate_content(&gemini_request).await
}

/// Prometheus text exposition
pub async fn metrics_handler() -> Result<Response, RelayError> {
    let body = metrics::gather_metrics()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}
