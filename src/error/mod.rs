// Error types for timetable-relay
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Message returned when the Gemini API key is missing or still the placeholder.
pub const MISSING_API_KEY_MESSAGE: &str =
    "Gemini API key is not configured on the server. Please check your .env file.";

/// Message returned when the request carries no usable `image_data`.
pub const NO_IMAGE_DATA_MESSAGE: &str = "No image data provided.";

/// Message returned for any upstream failure. Upstream detail is never sent to callers.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to call Gemini API.";

/// Message for failures inside the relay itself.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Gemini API error: {0}")]
    Upstream(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// HTTP status and caller-facing message for this error.
    ///
    /// Only client input errors echo a specific message; server-side
    /// failures collapse to fixed messages so upstream detail never leaks.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            RelayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, NO_IMAGE_DATA_MESSAGE),
            RelayError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, MISSING_API_KEY_MESSAGE),
            RelayError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE),
            RelayError::ConfigParsing(_) | RelayError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

// Convert RelayError to HTTP responses for Axum
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
