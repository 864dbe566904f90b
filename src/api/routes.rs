//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, health_handler, redirect_handler, shorten_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET    /health`  - Database health check
/// - `POST   /shorten` - Create or reuse a short code
/// - `GET    /{code}`  - Temporary redirect to the original URL
/// - `PUT    /{code}`  - Point a code at a new URL
/// - `DELETE /{code}`  - Remove a code
///
/// Static segments take precedence over `/{code}`. `health` contains `l`,
/// which the code alphabet leaves out; `shorten` is seven characters long and
/// so cannot be produced at the default code length.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route(
            "/{code}",
            get(redirect_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
