// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::GeminiConfig;
use crate::error::{RelayError, Result};
use crate::metrics;
use crate::models::gemini::{GenerateContentRequest, OpaquePayload};
use crate::utils::logging::sanitize;
use reqwest::{header, Client};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Client for the Google Gemini `generateContent` endpoint.
///
/// Holds the API key from configuration; handlers never read credentials
/// from the environment themselves. One call per request, no retries: the
/// configured timeout is the only failure policy.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Succeeds even when no API key is configured; callers check
    /// [`GeminiClient::is_configured`] and report the misconfiguration per request.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with {}s timeout", config.timeout_seconds);

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Whether a usable (non-placeholder) API key is configured
    pub fn is_configured(&self) -> bool {
        self.config.credential().is_some()
    }

    /// Get the endpoint URL
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Call Gemini `generateContent` once and return the body untouched.
    ///
    /// Any transport error, timeout or non-2xx status becomes
    /// [`RelayError::Upstream`] with the detail logged here.
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> Result<OpaquePayload> {
        let api_key = self.config.credential().ok_or_else(|| {
            RelayError::Config("Gemini API key is missing or still the placeholder".to_string())
        })?;

        debug!("Calling generateContent API at {}", self.config.api_url);
        let start = Instant::now();

        let response = match self
            .http_client
            .post(&self.config.api_url)
            .query(&[("key", api_key)])
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                metrics::record_gemini_call(None, start.elapsed().as_secs_f64());
                let detail = sanitize(&e.without_url().to_string());
                error!("Error calling Gemini API: {}", detail);
                return Err(RelayError::Upstream(detail));
            }
        };

        let status = response.status();
        metrics::record_gemini_call(Some(status.as_u16()), start.elapsed().as_secs_f64());

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = sanitize(&format!("HTTP {}: {}", status, error_text));
            error!("Error calling Gemini API: {}", detail);
            return Err(RelayError::Upstream(detail));
        }

        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(|e| {
            let detail = sanitize(&e.without_url().to_string());
            error!("Failed to read Gemini response body: {}", detail);
            RelayError::Upstream(detail)
        })?;

        debug!("Received Gemini response ({} bytes)", body.len());
        Ok(OpaquePayload::from_body(content_type, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use crate::models::gemini::{Content, Part};
    use mockito::Matcher;
    use serde_json::json;

    fn sample_request() -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: "hi".to_string(),
                }],
            }],
        }
    }

    fn client_for(url: String, key: Option<&str>) -> GeminiClient {
        GeminiClient::new(&GeminiConfig {
            api_key: key.map(ApiKey::new),
            api_url: url,
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_sends_key_as_query_parameter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/test:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"contents": [{"parts": [{"text": "hi"}]}]})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let client = client_for(
            format!("{}/v1beta/models/test:generateContent", server.url()),
            Some("test-key"),
        );
        let payload = client.generate_content(&sample_request()).await.unwrap();

        assert_eq!(payload.body().as_ref(), br#"{"candidates": []}"#);
        assert_eq!(payload.to_json(), Some(json!({"candidates": []})));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/generate")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"error": {"message": "quota"}}"#)
            .create_async()
            .await;

        let client = client_for(format!("{}/generate", server.url()), Some("test-key"));
        let err = client.generate_content(&sample_request()).await.unwrap_err();

        match err {
            RelayError::Upstream(detail) => assert!(detail.contains("429")),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_client_never_calls_upstream() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(format!("{}/generate", server.url()), None);
        assert!(!client.is_configured());

        let err = client.generate_content(&sample_request()).await.unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
        mock.assert_async().await;
    }
}
