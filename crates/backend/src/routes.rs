use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::handlers::mock_dispatch::{self, AppState};
use crate::system::middleware::request_logger;

/// CORS for a browser console on another origin; credentials are allowed so
/// the session cookie travels with every call.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// All routes of the mock server
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // MOCK ADMIN API (everything else)
        // ========================================
        .fallback(mock_dispatch::dispatch)
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors())
}
