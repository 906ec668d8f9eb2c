use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug, PartialEq)]
pub enum AirplaneError {
    /// Another airplane already uses this id.
    ///
    /// Raised on create, on update to a different id, and when the store's primary key
    /// constraint rejects a concurrent insert. Results in 400 Bad Request with the
    /// message keyed under `id`.
    #[error("Airplane with id {0} already exists")]
    DuplicateKey(i32),

    /// No airplane exists with this id.
    ///
    /// Results in 404 Not Found.
    #[error("Airplane with id {0} not found")]
    NotFound(i32),
}

impl IntoResponse for AirplaneError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::DuplicateKey(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "id": "id already exists" })),
            )
                .into_response(),
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageDto {
                    message: "Airplane not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
