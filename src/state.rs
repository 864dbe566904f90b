//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::SqliteUrlMappingRepository;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<SqliteUrlMappingRepository>>,
    /// Prefix joined with a code to form the public short URL.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService<SqliteUrlMappingRepository>>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            shortener,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
