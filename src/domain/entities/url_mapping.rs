//! URL mapping entity.

use sqlx::FromRow;

/// A stored association between a short code and the URL it points to.
///
/// `id` is assigned by the store and is never exposed through the API; `code`
/// is the only external handle.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub code: String,
}

impl UrlMapping {
    pub fn new(id: i64, original_url: String, code: String) -> Self {
        Self {
            id,
            original_url,
            code,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub code: String,
}

impl NewUrlMapping {
    pub fn new(original_url: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            code: code.into(),
        }
    }
}
