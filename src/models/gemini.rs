// Gemini API type definitions
// Author: kelexine (https://github.com/kelexine)

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gemini `generateContent` request body.
///
/// Field names follow the snake_case spelling the REST endpoint accepts
/// alongside camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Single-turn conversation: one content entry holding prompt and image.
    pub contents: Vec<Content>,
}

/// Content in a turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Individual part of content in a Gemini request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content part.
    Text { text: String },

    /// Inline data (images, etc).
    InlineData { inline_data: InlineData },
}

impl Part {
    /// Get text content if this is a Text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }
}

/// Inline image data for vision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String, // base64 encoded
}

/// Upstream response body, relayed without interpretation.
///
/// The bytes and content type are kept exactly as received so the caller
/// sees the upstream body unchanged: key order, whitespace and number
/// spelling included. Bodies that are not valid JSON are relayed the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaquePayload {
    content_type: Option<HeaderValue>,
    body: Bytes,
}

impl OpaquePayload {
    pub fn from_body(content_type: Option<HeaderValue>, body: Bytes) -> Self {
        Self { content_type, body }
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn content_type(&self) -> Option<&HeaderValue> {
        self.content_type.as_ref()
    }

    /// Parse the body as untyped JSON. Never used on the response path.
    pub fn to_json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

impl IntoResponse for OpaquePayload {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));
        (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], self.body).into_response()
    }
}
