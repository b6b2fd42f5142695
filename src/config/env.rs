// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate client configuration from .env files

use crate::errors::PlacesError;
use dotenv::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/v1";

/// Client configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with ClientConfig::from_env() at startup, or build it directly in code
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Google Places API key (sent as X-Goog-Api-Key)
    pub api_key: String,

    /// Places API base URL (default https://places.googleapis.com/v1)
    pub base_url: String,

    /// Per-request HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Default languageCode when a request leaves it blank
    pub language: String,

    /// Default regionCode when a request leaves it blank
    pub region: String,

    /// Optional client-side rate limit (requests per second)
    pub max_qps: Option<u32>,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            language: String::new(),
            region: String::new(),
            max_qps: None,
            log_level: "warn".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Unset or unparseable values fall back to defaults
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = ClientConfig::default();

        ClientConfig {
            api_key: env::var("GOOGLE_PLACES_API_KEY").unwrap_or_default(),

            base_url: env::var("GOOGLE_PLACES_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),

            timeout_secs: env::var("PLACES_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),

            language: env::var("PLACES_LANGUAGE").unwrap_or_default(),

            region: env::var("PLACES_REGION").unwrap_or_default(),

            max_qps: env::var("PLACES_MAX_QPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|qps: &u32| *qps > 0),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the client can authenticate before any call is made
    pub fn validate(&self) -> Result<(), PlacesError> {
        if self.api_key.trim().is_empty() {
            return Err(PlacesError::MissingApiKey);
        }

        if self.language.trim().is_empty() {
            log::debug!("PLACES_LANGUAGE not configured - upstream default language applies");
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_api_key() {
        let config = ClientConfig::default();
        assert!(matches!(config.validate(), Err(PlacesError::MissingApiKey)));

        let config = ClientConfig::new("   ");
        assert!(matches!(config.validate(), Err(PlacesError::MissingApiKey)));

        let config = ClientConfig::new("key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.max_qps.is_none());
    }
}
