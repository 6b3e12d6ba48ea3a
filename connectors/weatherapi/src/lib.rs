//! WeatherAPI.com connector for Nimbus weather lookups

use nimbus_core::prelude::*;
use reqwest::Client;
use tracing::{debug, error, info};

mod config;

pub use config::WeatherApiConfig;

/// WeatherAPI.com implementation of [`WeatherProvider`]
pub struct WeatherApiProvider {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiProvider {
    /// Create a new WeatherAPI.com provider
    pub fn new(config: WeatherApiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ProviderError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn current_url(&self) -> String {
        format!("{}/current.json", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    /// One GET to the upstream `current.json` endpoint. Every failure path
    /// terminates in a `ProviderError`; nothing propagates untyped.
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherObservation, ProviderError> {
        debug!("Fetching current weather for city: {}", query.city);

        let response = self
            .client
            .get(self.current_url())
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", query.city.as_str()),
                ("aqi", query.aqi.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Request to weather API timed out for city: {}", query.city);
                    ProviderError::Timeout
                } else {
                    error!("Request to weather API failed: {} for city: {}", e, query.city);
                    ProviderError::Network(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = format!("weather API error {} for url {}", status, self.current_url());
            error!("HTTP error occurred: {} for city: {}", detail, query.city);
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                error!("Request to weather API timed out for city: {}", query.city);
                ProviderError::Timeout
            } else {
                error!(
                    "Failed to parse weather API response: {} for city: {}",
                    e, query.city
                );
                ProviderError::ResponseParse(format!("Failed to parse response: {}", e))
            }
        })?;

        info!("Fetched current weather for city: {}", query.city);

        Ok(WeatherObservation {
            payload,
            status: status.as_u16(),
        })
    }
}
