pub mod handlers;
pub mod models;
pub mod openapi;

use axum::Router;
use http::{Method, header};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use handlers::SharedService;

/// The full application: API routes under `/api` plus the shared layers.
pub fn build_app(service: SharedService, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api", handlers::api_routes(service))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
}
