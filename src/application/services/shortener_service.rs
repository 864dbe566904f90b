//! Short code creation and mapping management.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::ShortenerError;
use crate::domain::StoreError;
use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::utils::code_generator::{CodeGenerator, DEFAULT_MAX_ATTEMPTS, RandomCodeGenerator};

/// Service for creating, resolving, updating and deleting short codes.
///
/// All policy lives here: reuse of an existing code for a known URL and the
/// bounded retry on code collisions. The repository only stores rows and
/// reports uniqueness violations.
pub struct ShortenerService<R: UrlMappingRepository> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl<R: UrlMappingRepository> ShortenerService<R> {
    /// Creates a service with the default random generator and attempt bound.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_generator(
            repository,
            Arc::new(RandomCodeGenerator::default()),
            DEFAULT_MAX_ATTEMPTS,
        )
    }

    /// Creates a service with an explicit generator and attempt bound.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn with_generator(
        repository: Arc<R>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Returns the code for `original_url`, creating a mapping if needed.
    ///
    /// # Deduplication
    ///
    /// If a mapping with exactly the same URL string exists, its code is
    /// returned and nothing is written. No normalization is applied, so
    /// `https://example.com` and `https://example.com/` get different codes.
    ///
    /// # Code Generation
    ///
    /// Each attempt draws a fresh candidate and inserts it. The store's unique
    /// constraint decides whether the candidate is free, so concurrent creates
    /// drawing the same code cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::GenerationExhausted`] if every attempt
    /// collided, and [`ShortenerError::Store`] for any other store failure.
    pub async fn create(&self, original_url: &str) -> Result<String, ShortenerError> {
        if let Some(existing) = self.repository.find_by_url(original_url).await? {
            debug!(code = %existing.code, "Reusing existing short code");
            return Ok(existing.code);
        }

        let mapping = self.insert_with_fresh_code(original_url).await?;
        info!(code = %mapping.code, url = %mapping.original_url, "Created short URL");

        Ok(mapping.code)
    }

    /// Looks up the URL stored for `code`.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, ShortenerError> {
        let mapping = self.repository.find_by_code(code).await?;

        if mapping.is_none() {
            warn!(code, "Short code not found");
        }

        Ok(mapping.map(|m| m.original_url))
    }

    /// Points `code` at `new_original_url`.
    ///
    /// Overwrites unconditionally; another mapping with the same URL is left
    /// alone. Returns `false` if the code does not exist.
    pub async fn update(&self, code: &str, new_original_url: &str) -> Result<bool, ShortenerError> {
        let updated = self.repository.update_url(code, new_original_url).await?;

        if updated {
            info!(code, url = new_original_url, "Updated short URL");
        } else {
            warn!(code, "Short code not found for update");
        }

        Ok(updated)
    }

    /// Removes the mapping for `code`. Returns `false` if it did not exist.
    pub async fn delete(&self, code: &str) -> Result<bool, ShortenerError> {
        let deleted = self.repository.delete(code).await?;

        if deleted {
            info!(code, "Deleted short URL");
        } else {
            warn!(code, "Short code not found for deletion");
        }

        Ok(deleted)
    }

    /// Inserts `original_url` under a newly generated code, retrying on
    /// collisions up to `max_attempts` times.
    async fn insert_with_fresh_code(&self, original_url: &str) -> Result<UrlMapping, ShortenerError> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();
            let new_mapping = NewUrlMapping::new(original_url, code);

            match self.repository.insert(new_mapping).await {
                Ok(mapping) => return Ok(mapping),
                Err(StoreError::UniqueViolation { .. }) => {
                    debug!(attempt, "Short code collision, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        error!(
            attempts = self.max_attempts,
            "Failed to generate unique short code"
        );

        Err(ShortenerError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}
