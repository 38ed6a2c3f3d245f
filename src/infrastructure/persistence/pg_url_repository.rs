//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for alias → URL storage.
///
/// Uses SQLx bind parameters for SQL injection protection. Duplicate aliases
/// are rejected by the unique constraint on `url.alias`; the vendor-specific
/// violation code never leaves this module.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Ensures the `url` table exists.
    ///
    /// Schema migration tooling is out of scope for this service, so the
    /// backend creates its own table on startup, matching the embedded
    /// backend's behavior.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url (
                id BIGSERIAL PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO url (alias, url)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(alias)
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(id)
    }

    async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        url.ok_or_else(|| AppError::not_found("Alias not found", json!({ "alias": alias })))
    }
}
