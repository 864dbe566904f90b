//! Persisted entities.
//!
//! - [`UrlMapping`] - A stored `code -> original_url` row
//! - [`NewUrlMapping`] - Input for inserting a row

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
