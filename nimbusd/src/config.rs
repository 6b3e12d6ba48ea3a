//! Configuration management for nimbusd

use crate::cli::Cli;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use nimbus_core::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the nimbusd daemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NimbusdConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// WeatherAPI.com API key
    pub weather_api_key: String,
    /// WeatherAPI.com base URL
    pub weather_api_base: String,
    /// Outbound request timeout in seconds
    pub timeout: u64,
    /// Enable permissive CORS on the HTTP server
    pub enable_cors: bool,
}

impl Default for NimbusdConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            weather_api_key: String::new(),
            weather_api_base: "http://api.weatherapi.com/v1".to_string(),
            timeout: 10,
            enable_cors: true,
        }
    }
}

impl NimbusdConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: &Option<std::path::PathBuf>) -> Result<Self, CoreError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config file if it exists
        let default_config_paths = [
            "nimbusd.yaml",
            "nimbusd.yml",
            ".nimbusd.yaml",
            ".nimbusd.yml",
        ];

        for path in &default_config_paths {
            if Path::new(path).exists() {
                figment = figment.merge(Yaml::file(path));
                break;
            }
        }

        // Load from specified config file
        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Yaml::file(path));
            } else {
                return Err(CoreError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
        }

        // Load from environment variables (prefixed with NIMBUS_)
        figment = figment.merge(Env::prefixed("NIMBUS_"));

        figment
            .extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse configuration: {}", e)))
    }

    /// Apply CLI argument overrides to the configuration
    pub fn with_overrides(mut self, args: &Cli) -> Self {
        if let Some(ref bind) = args.bind {
            self.bind_address = bind.clone();
        }

        self
    }
}
