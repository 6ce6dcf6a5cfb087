//! HTTP route handlers.
//!
//! The routing table is built once at startup. Probe and introspection routes
//! carry `Cache-Control: no-store` since they reflect live process state.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.
//! Unknown paths and wrong methods fall through to axum's default 404/405.

pub mod debug_config;
pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Path of the greeting route
pub const ROUTE_GREETING: &str = "/";
/// Path polled by liveness/readiness probes
pub const ROUTE_HEALTHZ: &str = "/healthz";
/// Path of the diagnostic introspection route
pub const ROUTE_DEBUG_CONFIG: &str = "/debug-config";

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let greeting_routes = Router::new().route(ROUTE_GREETING, get(greeting::index));

    // Probe and diagnostics - never cached
    let live_routes = Router::new()
        .route(ROUTE_HEALTHZ, get(health::healthz))
        .route(ROUTE_DEBUG_CONFIG, get(debug_config::show))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(greeting_routes)
        .merge(live_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::AppConfig;

    fn router(pairs: &[(&str, &str)]) -> Router {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        create_router(AppState::with_env(AppConfig::default(), env))
    }

    #[tokio::test]
    async fn test_healthz_is_not_cacheable() {
        let response = router(&[])
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_NO_STORE
        );
    }

    #[tokio::test]
    async fn test_greeting_is_plain_text() {
        let response = router(&[("APP_MESSAGE", "Hi")])
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(http::header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, greeting::compose_greeting("Hi"));
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let response = router(&[])
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get("x-request-id").unwrap();
        assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }
}
