//! Domain layer: the URL mapping entity, the store contract and its errors.
//!
//! Nothing in here knows about HTTP or SQL. The storage engine is reached
//! only through [`repositories::UrlMappingRepository`], implemented in
//! `crate::infrastructure::persistence`.
//!
//! # Modules
//!
//! - [`entities`] - Persisted data structures
//! - [`repositories`] - Store trait definitions
//! - [`error`] - Store error classification

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::StoreError;
