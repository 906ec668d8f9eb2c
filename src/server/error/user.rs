use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum UserError {
    /// Registration used a username that already belongs to an account.
    ///
    /// Results in 400 Bad Request keyed under `username`, matching the shape of field
    /// validation errors.
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UsernameTaken(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "username": ["A user with that username already exists."] })),
            )
                .into_response(),
        }
    }
}
