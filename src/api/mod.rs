//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into [`crate::application::services::ShortenerService`]
//! calls and formats the results.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
