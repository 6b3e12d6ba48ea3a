//! Core traits defining the port interfaces for Nimbus

use crate::errors::{PresentationError, ProviderError};
use crate::types::{WeatherObservation, WeatherQuery};
use async_trait::async_trait;
use std::sync::Arc;

/// Port for upstream weather data sources
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for the queried city.
    ///
    /// Implementations must translate every transport and HTTP failure into
    /// a [`ProviderError`]; no failure may escape this boundary untyped.
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherObservation, ProviderError>;
}

/// Trait for presentation adapters exposing the service to callers
#[async_trait]
pub trait PresentationAdapter: Send + Sync {
    /// Start serving requests against the given provider
    async fn start(&self, provider: Arc<dyn WeatherProvider>) -> Result<(), PresentationError>;

    /// Stop serving requests
    async fn stop(&self) -> Result<(), PresentationError>;
}
