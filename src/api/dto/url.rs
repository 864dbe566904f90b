//! DTOs for creating and updating short URLs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::url_validator::validate_http_url;

/// Request body for `POST /shorten` and `PUT /{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlRequest {
    /// Absolute HTTP/HTTPS URL, stored exactly as submitted.
    #[validate(custom(function = "validate_http_url"))]
    pub original_url: String,
}

/// A short URL and the address it points to.
#[derive(Debug, Serialize)]
pub struct UrlInfo {
    pub original_url: String,
    pub code: String,
    pub short_url: String,
}

/// Confirmation returned by `DELETE /{code}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
