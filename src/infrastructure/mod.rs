//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite repository implementations

pub mod persistence;
