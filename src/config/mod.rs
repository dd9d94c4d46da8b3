// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Conventional variable name for the Gemini key, honoured on top of the
/// prefixed variables.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. `GEMINI_API_KEY` (highest, key only)
    /// 2. Environment variables (`TIMETABLE_RELAY_SECTION__FIELD`)
    /// 3. Config file (`path`, or `~/.timetable-relay/config.toml` if present)
    /// 4. Defaults (lowest)
    ///
    /// CLI overrides are applied by the caller afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("TIMETABLE_RELAY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("gemini.api_key", std::env::var(GEMINI_API_KEY_ENV).ok())?
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timetable-relay")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 6123

[gemini]
api_url = "http://localhost:9999/generate"
timeout_seconds = 5
"#
        )
        .unwrap();

        let config = tokio_test::assert_ok!(AppConfig::load(Some(file.path())));
        assert_eq!(config.server.port, 6123);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.gemini.api_url, "http://localhost:9999/generate");
        assert_eq!(config.gemini.timeout_seconds, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        tokio_test::assert_err!(AppConfig::load(Some(&missing)));
    }
}
