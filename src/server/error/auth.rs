use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{DetailDto, ErrorDto};

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Authentication credentials were not provided.")]
    MissingCredentials,

    /// Header was not a bearer token, or the token failed signature/format checks.
    #[error("Invalid Token")]
    InvalidToken,

    /// Token signature is valid but its `exp` claim has passed.
    #[error("Expired Token")]
    ExpiredToken,

    /// Login attempted with an unknown username or a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredentials` / `InvalidToken` / `ExpiredToken` → 403 Forbidden with a `detail` body
/// - `InvalidCredentials` → 400 Bad Request with an `error` body
///
/// The same message is used for unknown usernames and wrong passwords so a caller cannot
/// probe which accounts exist.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failed: {}", self);

        match self {
            Self::MissingCredentials | Self::InvalidToken | Self::ExpiredToken => (
                StatusCode::FORBIDDEN,
                Json(DetailDto {
                    detail: self.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
