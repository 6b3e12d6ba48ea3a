//! HTTP presentation layer for Nimbus
//!
//! Exposes the weather relay endpoint over axum and maps provider failures
//! onto the outbound (status, JSON body) pair at this boundary only.

use async_trait::async_trait;
use axum::{http::StatusCode, response::Json, routing::get, Router};
use nimbus_core::prelude::*;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

mod handlers;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8000)),
            enable_cors: true,
        }
    }
}

/// HTTP presentation adapter
pub struct HttpServer {
    config: HttpServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: HttpServerConfig) -> Self {
        Self { config }
    }

    fn build_router(&self, provider: Arc<dyn WeatherProvider>) -> Router {
        build_router(provider, self.config.enable_cors)
    }
}

/// Build the axum router with all routes
pub fn build_router(provider: Arc<dyn WeatherProvider>, enable_cors: bool) -> Router {
    let state = AppState { provider };

    let mut router = Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Weather relay
        .route("/weather", get(handlers::weather::current_weather))
        .route("/weather/", get(handlers::weather::current_weather))
        .with_state(state);

    if enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[async_trait]
impl PresentationAdapter for HttpServer {
    async fn start(&self, provider: Arc<dyn WeatherProvider>) -> Result<(), PresentationError> {
        info!("Starting HTTP server on {}", self.config.bind_address);

        let router = self.build_router(provider);

        let listener = tokio::net::TcpListener::bind(&self.config.bind_address)
            .await
            .map_err(|e| {
                PresentationError::StartupFailed(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_address, e
                ))
            })?;

        info!("HTTP server listening on {}", self.config.bind_address);

        axum::serve(listener, router)
            .await
            .map_err(|e| PresentationError::StartupFailed(format!("Server error: {}", e)))?;

        Ok(())
    }

    async fn stop(&self) -> Result<(), PresentationError> {
        info!("Stopping HTTP server");
        Ok(())
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

/// Convert provider errors to the outbound (status, JSON body) pair
pub fn handle_provider_error(error: ProviderError) -> (StatusCode, Json<Value>) {
    let (status, message) = match error {
        ProviderError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "requests timed out".to_string()),
        ProviderError::Upstream { status, detail } => (
            // The upstream status came from a parsed response; an out-of-range
            // integer degrades to 502 rather than panicking.
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            detail,
        ),
        ProviderError::Network(_) | ProviderError::ResponseParse(_) | ProviderError::Config(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "an unexpected error occurred".to_string(),
        ),
    };

    error!("Weather request failed: {} - {}", status, message);
    (status, Json(json!({ "error": message })))
}
