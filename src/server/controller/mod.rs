//! HTTP request handlers.
//!
//! Controllers read request bodies, convert DTOs into service parameters, call the
//! service layer and convert the resulting domain models back into response DTOs.

pub mod airplane;
pub mod health;
pub mod user;

#[cfg(test)]
mod test;
