//! Transient request and response shapes for weather relay operations

use serde::{Deserialize, Serialize};

/// Default air-quality-index flag forwarded upstream when the caller omits it
pub const DEFAULT_AQI: &str = "no";

/// A single weather lookup, alive for the duration of one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherQuery {
    /// City name to look up
    pub city: String,
    /// Air-quality-index flag, forwarded upstream uninterpreted
    pub aqi: String,
}

impl WeatherQuery {
    /// Create a query for the given city with the default `aqi` flag
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            aqi: DEFAULT_AQI.to_string(),
        }
    }

    /// Set the air-quality-index flag
    pub fn with_aqi(mut self, aqi: impl Into<String>) -> Self {
        self.aqi = aqi.into();
        self
    }
}

/// A successful upstream response: the weather document verbatim plus the
/// upstream status code (200 expected)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Upstream response body, passed through unmodified
    pub payload: serde_json::Value,
    /// Upstream HTTP status
    pub status: u16,
}
