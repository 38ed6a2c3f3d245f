//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /`          - Save a URL under a new alias
//! - `GET  /{alias}`   - Redirect to the stored URL
//! - `GET  /metrics`   - Prometheus metrics exposition
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{metrics_handler, redirect_handler, save_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The static `/metrics` route takes precedence over the `/{alias}` capture,
/// so `metrics` is effectively a reserved alias.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", post(save_handler))
        .route("/{alias}", get(redirect_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
