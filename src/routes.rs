//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Liveness probe (no store access)
//! - `/api/*`      - Click recording and aggregation
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Credentialed cross-origin access for configured origins
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - layer built from the configured origins in [`crate::server::run`]
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
