//! Prometheus metrics exposition.

use axum::extract::State;

use crate::state::AppState;

/// Renders the Prometheus registry in text exposition format.
///
/// # Endpoint
///
/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> String {
    state.metrics.render()
}
