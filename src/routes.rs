//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database and cache (public)
//! - `/api/v1/*`         - Employee REST API (HTTP basic auth required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API
//! - **Authentication** - HTTP basic credentials on the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// The employee API with authentication applied, ready to be nested.
pub fn api_router(state: AppState) -> Router<AppState> {
    api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state, auth::layer))
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_per_second` / `rate_burst` - per-IP token bucket applied to `/api/v1`
pub fn app_router(state: AppState, rate_per_second: u64, rate_burst: u32) -> NormalizePath<Router> {
    let api_router =
        api_router(state.clone()).layer(rate_limit::layer(rate_per_second, rate_burst));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
