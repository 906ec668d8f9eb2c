//! Wire-format DTOs shared by every HTTP endpoint.
//!
//! These types describe exactly what goes over the wire. Server-side domain models in
//! `server::model` are converted into them at the controller boundary.

pub mod airplane;
pub mod api;
pub mod user;
