// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// MIME type assumed when the caller does not send one.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Body of `POST /analyze-image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeImageRequest {
    /// Base64 image bytes, forwarded untouched.
    pub image_data: String,

    #[serde(default = "default_mime_type", deserialize_with = "mime_type_or_default")]
    pub mime_type: String,
}

impl AnalyzeImageRequest {
    pub fn new(image_data: impl Into<String>) -> Self {
        Self {
            image_data: image_data.into(),
            mime_type: default_mime_type(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

fn default_mime_type() -> String {
    DEFAULT_MIME_TYPE.to_string()
}

// An explicit `null` falls back to the default as well
fn mime_type_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(default_mime_type))
}
