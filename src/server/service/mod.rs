//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They enforce business
//! rules, coordinate repository calls and own transaction boundaries. They work with
//! domain models rather than DTOs or entity models.

pub mod airplane;
pub mod password;
pub mod token;
pub mod user;
