//! Application layer: shortening policy on top of the store.
//!
//! - [`services::ShortenerService`] - Create, resolve, update and delete mappings
//! - [`error::ShortenerError`] - Failures surfaced by the service

pub mod error;
pub mod services;

pub use error::ShortenerError;
