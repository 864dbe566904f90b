//! Validation of URLs submitted for shortening.
//!
//! Only checks the input; the accepted string is stored exactly as given.
//! Two textually different spellings of the same address are therefore
//! distinct mappings.

use url::Url;
use validator::ValidationError;

/// Longest URL accepted for shortening, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL exceeds {MAX_URL_LENGTH} bytes")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP or HTTPS URL with a host.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative URLs
/// and [`UrlValidationError::UnsupportedProtocol`] for other schemes such as
/// `javascript:`, `data:` or `ftp:`.
pub fn check_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

/// `validator` hook wrapping [`check_url`].
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    check_url(input).map_err(|e| {
        let mut error = ValidationError::new("http_url");
        error.message = Some(e.to_string().into());
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert!(check_url("https://example.com").is_ok());
        assert!(check_url("https://example.com/test-redirect?a=1#top").is_ok());
    }

    #[test]
    fn test_accepts_http_with_port() {
        assert!(check_url("http://localhost:8080/path").is_ok());
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(matches!(
            check_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_relative_path() {
        assert!(check_url("/just/a/path").is_err());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            check_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            check_url("ftp://example.com/file"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(check_url(""), Err(UrlValidationError::Empty));
        assert_eq!(check_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(check_url(&url), Err(UrlValidationError::TooLong));
    }

    #[test]
    fn test_validator_hook_carries_message() {
        let err = validate_http_url("ftp://example.com").unwrap_err();
        assert_eq!(err.code, "http_url");
        assert!(err.message.unwrap().contains("HTTP and HTTPS"));
    }
}
