//! Helpers shared by the service and transport layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Input URL checks for the HTTP layer

pub mod code_generator;
pub mod url_validator;
