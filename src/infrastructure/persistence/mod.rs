//! Concrete [`crate::domain::repositories::UrlRepository`] implementations.
//!
//! Both backends realize the same logical schema (`url(id, alias, url)` with
//! a unique index on `alias`) and are interchangeable behind the trait.

pub mod pg_url_repository;
pub mod sqlite_url_repository;

pub use pg_url_repository::PgUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
