//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Request DTOs are built from untyped
//! JSON here so that every invalid field can be reported in one response.

pub mod airplane;
pub mod user;
