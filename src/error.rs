//! Application error taxonomy and HTTP error responses.
//!
//! Every error crossing a component boundary is one of four kinds:
//! validation failure, not found, conflict, or internal. Raw driver errors
//! are classified into this taxonomy at the storage boundary via
//! [`map_sqlx_error`] and never travel further.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Error kinds surfaced by handlers and repositories.
///
/// The `details` payload is included in the JSON response for client-facing
/// kinds. `Internal` deliberately carries no driver detail; full context is
/// logged at the boundary where the failure was classified.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Request validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Expected conditions stay below error level; only Internal is an
        // operator-facing failure.
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => {
                tracing::debug!(%message, "request validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    message,
                    details,
                )
            }
            AppError::NotFound { message, details } => {
                tracing::info!(%message, "not found");
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                tracing::info!(%message, "conflict");
                (StatusCode::BAD_REQUEST, "conflict", message, details)
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    message,
                    details,
                )
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Classifies a raw sqlx error into the taxonomy.
///
/// A native unique-constraint violation becomes [`AppError::Conflict`]; every
/// other driver error is logged here with full context and surfaced as an
/// opaque [`AppError::Internal`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Alias already exists",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    tracing::error!(error = %e, "database error");
    AppError::internal("Database error", json!({}))
}
