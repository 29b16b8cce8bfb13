//! API module
//!
//! HTTP API endpoints and middleware.

pub mod context;
pub mod middleware;
pub mod routes;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::event_store::SharedEventRepository;

pub use context::RequestContext;
pub use routes::create_router;

/// Build the full application: API routes, middleware, health check
pub fn build_app(repository: SharedEventRepository, config: &Config) -> Router {
    // Note: Axum layers are applied in reverse order (last added = first executed)
    // Order: context -> logging -> handler
    let api_routes = create_router()
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(middleware::context_middleware));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(repository)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// CORS policy; an empty origin list allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(24 * 60 * 60))
}
