//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Read-only: safe to retry and to call concurrently for the same alias.
///
/// # Errors
///
/// Returns 400 for an empty alias (without touching storage), 404 for an
/// unknown alias, 500 on storage failure.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if alias.is_empty() {
        return Err(AppError::bad_request(
            "Alias must not be empty",
            json!({ "field": "alias" }),
        ));
    }

    let url = state.repository.get_url(&alias).await?;

    metrics::counter!("redirects_total").increment(1);
    tracing::debug!(%alias, %url, "redirecting");

    Ok(Redirect::temporary(&url))
}
