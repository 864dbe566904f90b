//! SQLite implementation of the URL mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::domain::StoreError;
use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;

/// SQLite repository for URL mappings.
///
/// Every statement runs in autocommit mode, so a returned `Ok` means the write
/// is durable. Uniqueness of `code` is enforced by the `UNIQUE` column
/// constraint, not by a prior lookup.
pub struct SqliteUrlMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlMappingRepository {
    /// Creates a new repository over an existing pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens a pool described by `config` and wraps it.
    ///
    /// The database file is created if missing. Acquiring a connection waits
    /// at most `acquire_timeout`; a locked database is retried for at most
    /// `busy_timeout`. Migrations are not applied here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is malformed or the
    /// database cannot be opened.
    pub async fn connect(config: &StorageConfig) -> Result<Self, StoreError> {
        let pool = connect_pool(config).await?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }
}

/// Builds an SQLite pool from storage settings.
pub async fn connect_pool(config: &StorageConfig) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .max_lifetime(Some(config.max_lifetime()))
        .connect_with(options)
        .await?;

    Ok(pool)
}

#[async_trait]
impl UrlMappingRepository for SqliteUrlMappingRepository {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, StoreError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, original_url, code
            FROM urls
            WHERE original_url = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            "SELECT id, original_url, code FROM urls WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (original_url, code)
            VALUES (?, ?)
            RETURNING id, original_url, code
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn update_url(&self, code: &str, new_original_url: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE urls SET original_url = ? WHERE code = ?")
            .bind(new_original_url)
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM urls WHERE code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
