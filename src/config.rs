// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.

use reqwest::Url;
use std::env;
use std::path::PathBuf;

/// Base URL of the platform REST API when nothing overrides it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Directory holding persisted credentials when nothing overrides it.
pub const DEFAULT_STORAGE_DIR: &str = ".microtask-session";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Versioned base URL of the REST API (e.g. `https://host/api/v1`)
    pub api_base_url: Url,
    /// Directory for durable credential storage
    pub storage_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid"),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let raw_url = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = parse_base_url(raw_url.trim())?;

        let storage_dir = env::var("SESSION_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR));

        Ok(Self {
            api_base_url,
            storage_dir,
        })
    }
}

/// Parse and sanity-check an API base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl(format!(
            "{raw}: unsupported scheme {other}"
        ))),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("API_BASE_URL", "https://earn.example.com/api/v1");
        env::set_var("SESSION_STORAGE_DIR", "/tmp/microtask-test");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_base_url.as_str(), "https://earn.example.com/api/v1");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/microtask-test"));

        env::remove_var("API_BASE_URL");
        env::remove_var("SESSION_STORAGE_DIR");
    }

    #[test]
    fn test_parse_base_url_rejects_bad_input() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://example.com/api").is_err());
        assert!(parse_base_url("http://localhost:8000/api/v1").is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url.as_str(), DEFAULT_API_BASE_URL);
    }
}
