//! Handlers for updating and deleting short URLs.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::url::{MessageResponse, UrlInfo, UrlRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Points an existing short code at a new URL.
///
/// # Endpoint
///
/// `PUT /{code}`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/updated" }
/// ```
///
/// The new URL is written as is, even if another code already points to it.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the code doesn't exist.
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<Json<UrlInfo>, AppError> {
    payload.validate()?;

    let updated = state
        .shortener
        .update(&code, &payload.original_url)
        .await?;

    if !updated {
        return Err(AppError::short_url_not_found(&code));
    }

    let short_url = state.short_url(&code);

    Ok(Json(UrlInfo {
        original_url: payload.original_url,
        code,
        short_url,
    }))
}

/// Permanently deletes a short code.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist (including a second delete
/// of the same code).
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.shortener.delete(&code).await? {
        return Err(AppError::short_url_not_found(&code));
    }

    Ok(Json(MessageResponse {
        message: "URL deleted successfully".to_string(),
    }))
}
