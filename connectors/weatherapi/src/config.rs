//! Configuration for the WeatherAPI.com connector

use serde::{Deserialize, Serialize};

/// WeatherAPI.com configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// WeatherAPI.com API key
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl WeatherApiConfig {
    /// Create a new config with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "http://api.weatherapi.com/v1".to_string(),
            timeout_ms: 10_000,
        }
    }

    /// Set the API base URL (for tests or compatible mirrors)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self::new("") // Empty API key - must be set by user
    }
}
