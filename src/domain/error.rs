//! Errors reported by the mapping store.

use thiserror::Error;

/// Failure of a store operation.
///
/// Uniqueness violations are kept apart from everything else so the shortener
/// can retry code generation on them and propagate the rest untouched.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("unique constraint violation: {}", constraint.as_deref().unwrap_or("unknown"))]
    UniqueViolation { constraint: Option<String> },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation { .. })
    }
}

/// Classifies an sqlx error.
///
/// Only a database-reported unique violation becomes
/// [`StoreError::UniqueViolation`]; pool timeouts, I/O failures and any other
/// database error are reported as [`StoreError::Unavailable`].
pub fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StoreError::UniqueViolation {
            constraint: db.constraint().map(str::to_string),
        };
    }

    StoreError::Unavailable(e.to_string())
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}
