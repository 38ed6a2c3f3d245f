//! Repository trait for alias → URL persistence.

use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for the alias → URL mapping.
///
/// The mapping is append-only: records are created exactly once and never
/// updated or deleted. Alias uniqueness is enforced by the backing store's
/// own unique constraint, not by a check-then-insert sequence, so concurrent
/// saves of the same alias cannot race past each other.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - embedded SQLite
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new alias → URL record and returns the assigned id.
    ///
    /// The caller is responsible for passing a non-empty alias and URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same alias already
    /// exists, detected atomically via the store's unique constraint.
    /// Returns [`AppError::Internal`] on any other database error.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, AppError>;

    /// Looks up the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Internal`] on any other database error.
    async fn get_url(&self, alias: &str) -> Result<String, AppError>;
}
