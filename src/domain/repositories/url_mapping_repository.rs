//! Repository trait for URL mapping persistence.

use crate::domain::StoreError;
use crate::domain::entities::{NewUrlMapping, UrlMapping};
use async_trait::async_trait;

/// Durable CRUD over [`UrlMapping`] rows.
///
/// The store holds no policy: it does not generate codes, retry or
/// deduplicate. It must, however, enforce uniqueness of `code` itself so that
/// racing inserts of the same code fail atomically.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Finds the first mapping whose `original_url` equals `original_url`
    /// byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Finds a mapping by its code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Inserts a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if `code` is already taken.
    /// Nothing is written in that case.
    ///
    /// Returns [`StoreError::Unavailable`] on other database errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError>;

    /// Replaces the `original_url` of the mapping identified by `code`.
    ///
    /// Returns `Ok(false)` if no mapping has that code. Other rows sharing
    /// `new_original_url` are irrelevant; URLs are not unique.
    async fn update_url(&self, code: &str, new_original_url: &str) -> Result<bool, StoreError>;

    /// Permanently removes the mapping identified by `code`.
    ///
    /// Returns `Ok(false)` if no mapping has that code.
    async fn delete(&self, code: &str) -> Result<bool, StoreError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks that the store can serve queries.
    async fn health_check(&self) -> Result<(), StoreError>;
}
