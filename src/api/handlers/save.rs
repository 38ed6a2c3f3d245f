//! Handler for the URL save endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::alias_generator::generate_alias;

/// Stores a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "my-alias" }
/// ```
///
/// `alias` is optional; when absent a random 6-character alphanumeric alias
/// is generated. A collision on a generated alias is not retried and surfaces
/// as the same conflict response a taken custom alias gets.
///
/// # Errors
///
/// Returns 400 if the URL is malformed, the alias is empty, or the alias is
/// already taken. Returns 500 on storage failure.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    payload.validate()?;

    let alias = payload.alias.unwrap_or_else(generate_alias);

    let id = state.repository.save_url(&payload.url, &alias).await?;

    metrics::counter!("urls_saved_total").increment(1);
    tracing::info!(id, %alias, "url saved");

    Ok(Json(SaveResponse { alias }))
}
