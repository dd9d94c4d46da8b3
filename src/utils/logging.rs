//! Structured logging and security-focused trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing utilities to prevent
//! the Gemini API key from leaking into logs. The key travels as a query
//! parameter, so `reqwest` errors carry it inside the request URL.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{RelayError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            RelayError::Config(format!("Invalid log level '{}': {}", config.level, e))
        })?,
    };

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes sensitive information from log messages.
///
/// Replaces every `key=` query parameter value and every Google API key
/// literal (`AIza...`) with a `\[REDACTED\]` placeholder.
pub fn sanitize(input: &str) -> String {
    let result = redact(input, "key=", true);
    redact(&result, "AIza", false)
}

// Replace the run of characters following each `marker` up to the next
// delimiter (whitespace, quote, `&`, `)` or end of string).
fn redact(input: &str, marker: &str, keep_marker: bool) -> String {
    const REPLACEMENT: &str = "[REDACTED_API_KEY]";

    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(marker) {
        let value_start = pos + marker.len();
        let tail = &rest[value_start..];
        let value_len = tail
            .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '&' | ')'))
            .unwrap_or(tail.len());

        if value_len == 0 {
            result.push_str(&rest[..value_start]);
        } else {
            result.push_str(&rest[..if keep_marker { value_start } else { pos }]);
            result.push_str(REPLACEMENT);
        }
        rest = &tail[value_len..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_query_key() {
        let input = "error sending request for url (https://example.com/v1beta/models/m:generateContent?key=secret123)";
        let output = sanitize(input);
        assert!(output.contains("key=[REDACTED_API_KEY])"));
        assert!(!output.contains("secret123"));
    }

    #[test]
    fn test_sanitize_google_api_key_literal() {
        let input = "API key AIzaSyA1b2C3d4 not valid";
        let output = sanitize(input);
        assert_eq!(output, "API key [REDACTED_API_KEY] not valid");
    }

    #[test]
    fn test_sanitize_multiple_occurrences() {
        let input = "a?key=one&x=1 b?key=two";
        let output = sanitize(input);
        assert_eq!(output, "a?key=[REDACTED_API_KEY]&x=1 b?key=[REDACTED_API_KEY]");
    }

    #[test]
    fn test_sanitize_leaves_clean_text() {
        let input = "HTTP 503 Service Unavailable";
        assert_eq!(sanitize(input), input);
    }
}
