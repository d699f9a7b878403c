//! Configuration management for the Contact Book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Endpoint that receives new contacts unless overridden.
pub const DEFAULT_ENDPOINT: &str = "https://511dafc932fa.ngrok-free.app/ReactApp/SaveContact";

/// Configuration for the Contact Book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the save-contact endpoint
    pub endpoint_url: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_ENDPOINT`: Save endpoint URL (default: [`DEFAULT_ENDPOINT`])
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is not an error
        let _ = dotenvy::dotenv();

        let endpoint_url = env::var("CONTACT_BOOK_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_ENDPOINT".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            endpoint_url,
            log_level,
        })
    }

    /// Configuration pointing at a specific endpoint (useful for testing).
    pub fn with_endpoint(endpoint_url: impl Into<String>) -> Self {
        Config {
            endpoint_url: endpoint_url.into(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
