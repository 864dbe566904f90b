//! Errors surfaced by the shortener service.

use thiserror::Error;

use crate::domain::StoreError;

/// Failure of a shortener operation.
///
/// A missing code is not an error: lookups return `Option` and mutations
/// return `bool`.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    /// Every generated candidate collided with an existing code.
    #[error("failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}
