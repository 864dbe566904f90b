//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use tracing::info;
use validator::Validate;

use crate::api::dto::url::{UrlInfo, UrlRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short code for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "code": "Xk3pQ9aB",
///   "short_url": "http://localhost:3000/Xk3pQ9aB"
/// }
/// ```
///
/// Submitting the same URL string again returns the same code.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is not an absolute HTTP(S) URL.
/// Returns 500 Internal Server Error if no unique code could be generated.
/// Returns 503 Service Unavailable if the database cannot be reached.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<Json<UrlInfo>, AppError> {
    payload.validate()?;

    info!(url = %payload.original_url, "Shorten request");

    let code = state.shortener.create(&payload.original_url).await?;
    let short_url = state.short_url(&code);

    Ok(Json(UrlInfo {
        original_url: payload.original_url,
        code,
        short_url,
    }))
}
