//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod airplane;
pub mod auth;
pub mod config;
pub mod internal;
pub mod user;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        airplane::AirplaneError, auth::AuthError, config::ConfigError, internal::InternalError,
        user::UserError, validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors handle their own
/// response mapping, infrastructure errors become a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure (missing, invalid or expired token, bad credentials).
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Airplane domain failure (duplicate id, unknown id).
    #[error(transparent)]
    AirplaneErr(#[from] AirplaneError),

    /// User account failure (username already taken).
    #[error(transparent)]
    UserErr(#[from] UserError),

    /// Request body failed field validation.
    ///
    /// Results in 400 Bad Request with per-field messages.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal failure indicating a bug or broken invariant.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For domain errors, delegated to the wrapped error's `into_response()`
/// - 500 Internal Server Error - For configuration, database, IO and internal errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::AirplaneErr(err) => err.into_response(),
            Self::UserErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
