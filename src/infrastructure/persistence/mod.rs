//! SQLite repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as` and bound parameters;
//! the schema is created by the embedded migrations in `migrations/`.

pub mod sqlite_url_mapping_repository;

pub use sqlite_url_mapping_repository::{SqliteUrlMappingRepository, connect_pool};

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
