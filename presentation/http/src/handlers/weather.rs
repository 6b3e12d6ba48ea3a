//! Weather relay handler

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use nimbus_core::prelude::*;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{handle_provider_error, AppState};

/// Query parameters accepted by the weather endpoint
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
    pub aqi: Option<String>,
}

/// Relay current weather conditions for the requested city.
///
/// The presence check on `city` happens before any outbound call; everything
/// after it is a pure pass-through of the provider's outcome.
pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> (StatusCode, Json<Value>) {
    let Some(city) = params.city.filter(|city| !city.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "City parameter is required"})),
        );
    };

    debug!("Handling weather request for city: {}", city);

    let mut query = WeatherQuery::new(city);
    if let Some(aqi) = params.aqi {
        query = query.with_aqi(aqi);
    }

    match state.provider.current(&query).await {
        Ok(observation) => (
            StatusCode::from_u16(observation.status).unwrap_or(StatusCode::OK),
            Json(observation.payload),
        ),
        Err(e) => handle_provider_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Scripted provider outcome for one test
    enum StubOutcome {
        Payload(Value),
        Timeout,
        Upstream(u16, String),
        Network,
    }

    /// In-memory provider that records every query it receives
    struct StubProvider {
        outcome: StubOutcome,
        calls: Mutex<Vec<WeatherQuery>>,
    }

    impl StubProvider {
        fn new(outcome: StubOutcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<WeatherQuery> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current(
            &self,
            query: &WeatherQuery,
        ) -> Result<WeatherObservation, ProviderError> {
            self.calls.lock().unwrap().push(query.clone());
            match &self.outcome {
                StubOutcome::Payload(payload) => Ok(WeatherObservation {
                    payload: payload.clone(),
                    status: 200,
                }),
                StubOutcome::Timeout => Err(ProviderError::Timeout),
                StubOutcome::Upstream(status, detail) => Err(ProviderError::Upstream {
                    status: *status,
                    detail: detail.clone(),
                }),
                StubOutcome::Network => {
                    Err(ProviderError::Network("connection refused".to_string()))
                }
            }
        }
    }

    async fn get(provider: Arc<StubProvider>, uri: &str) -> (StatusCode, Value) {
        let router = build_router(provider, false);
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_missing_city_is_rejected_before_any_call() {
        let provider = StubProvider::new(StubOutcome::Payload(json!({})));
        let (status, body) = get(provider.clone(), "/weather/").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "City parameter is required"}));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_city_is_rejected_before_any_call() {
        let provider = StubProvider::new(StubOutcome::Payload(json!({})));
        let (status, body) = get(provider.clone(), "/weather/?city=").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "City parameter is required"}));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_payload_passes_through_verbatim() {
        let payload = json!({
            "location": {"name": "London", "country": "United Kingdom"},
            "current": {"temp_c": 11.0, "condition": {"text": "Overcast"}}
        });
        let provider = StubProvider::new(StubOutcome::Payload(payload.clone()));
        let (status, body) = get(provider, "/weather/?city=London").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn test_aqi_defaults_to_no() {
        let provider = StubProvider::new(StubOutcome::Payload(json!({})));
        get(provider.clone(), "/weather/?city=London").await;

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].city, "London");
        assert_eq!(calls[0].aqi, "no");
    }

    #[tokio::test]
    async fn test_aqi_is_forwarded_unchanged() {
        let provider = StubProvider::new(StubOutcome::Payload(json!({})));
        get(provider.clone(), "/weather/?city=London&aqi=yes").await;

        assert_eq!(provider.calls()[0].aqi, "yes");
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_504() {
        let provider = StubProvider::new(StubOutcome::Timeout);
        let (status, body) = get(provider, "/weather/?city=London").await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body, json!({"error": "requests timed out"}));
    }

    #[tokio::test]
    async fn test_upstream_400_surfaces_with_upstream_status() {
        let provider = StubProvider::new(StubOutcome::Upstream(
            400,
            "weather API error 400 Bad Request".to_string(),
        ));
        let (status, body) = get(provider, "/weather/?city=Nowhereville").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("400"));
    }

    #[tokio::test]
    async fn test_connection_failure_surfaces_as_500() {
        let provider = StubProvider::new(StubOutcome::Network);
        let (status, body) = get(provider, "/weather/?city=London").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "an unexpected error occurred"}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let provider = StubProvider::new(StubOutcome::Payload(json!({})));
        let router = build_router(provider, false);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/forecast/?city=London")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_route_without_trailing_slash_also_dispatches() {
        let provider = StubProvider::new(StubOutcome::Payload(json!({"current": {}})));
        let (status, _) = get(provider, "/weather?city=London").await;

        assert_eq!(status, StatusCode::OK);
    }
}
