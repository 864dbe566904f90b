//! HTTP-facing error type.
//!
//! [`AppError`] is what handlers return. Lower layers have their own error
//! enums ([`crate::domain::StoreError`], [`crate::application::ShortenerError`])
//! which are converted here into a status code and a JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::ShortenerError;
use crate::domain::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
    #[error("{message}")]
    Unavailable { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    /// Shorthand for the "no mapping for this code" response.
    pub fn short_url_not_found(code: &str) -> Self {
        Self::not_found("Short URL not found", json!({ "code": code }))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
            AppError::Unavailable { message, details } => {
                ("service_unavailable", message, details)
            }
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::bad_request("Request validation failed", Value::Object(fields))
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::UniqueViolation { constraint } => AppError::internal(
                "Unique constraint violation",
                json!({ "constraint": constraint }),
            ),
            StoreError::Unavailable(reason) => {
                AppError::unavailable("Storage unavailable", json!({ "reason": reason }))
            }
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(error: ShortenerError) -> Self {
        match error {
            ShortenerError::GenerationExhausted { attempts } => AppError::internal(
                "Failed to generate unique short code",
                json!({ "attempts": attempts }),
            ),
            ShortenerError::Store(store) => store.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::short_url_not_found("abc").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::unavailable("down", json!({})).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_generation_exhausted_is_internal_error() {
        let err: AppError = ShortenerError::GenerationExhausted { attempts: 10 }.into();

        assert!(matches!(err, AppError::Internal { .. }));
        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.details["attempts"], 10);
    }

    #[test]
    fn test_store_unavailable_is_not_not_found() {
        let err: AppError =
            ShortenerError::Store(StoreError::Unavailable("pool timed out".to_string())).into();

        assert!(matches!(err, AppError::Unavailable { .. }));
        assert_eq!(err.to_error_info().code, "service_unavailable");
    }

    #[test]
    fn test_validation_errors_list_field_messages() {
        use crate::api::dto::url::UrlRequest;
        use validator::Validate;

        let request = UrlRequest {
            original_url: "ftp://example.com".to_string(),
        };
        let err: AppError = request.validate().unwrap_err().into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let info = err.to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(
            info.details["original_url"][0],
            "Only HTTP and HTTPS protocols are allowed"
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::short_url_not_found("abc");
        assert_eq!(err.to_string(), "Short URL not found");
    }
}
