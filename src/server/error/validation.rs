use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::DetailDto,
    server::util::validation::{BatchError, FieldErrors},
};

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A single request body failed validation.
    ///
    /// Serialized as an object mapping each failing field to its messages.
    #[error("Request body failed validation: {0:?}")]
    Fields(FieldErrors),

    /// One or more entries of a bulk request failed validation.
    ///
    /// Serialized as a list aligned with the request, holding an empty object for
    /// every entry that was valid.
    #[error("Bulk request failed validation")]
    Batch(Vec<FieldErrors>),

    /// The body could not be read as JSON at all.
    ///
    /// Covers syntax errors and a missing or wrong `Content-Type`. Keeps the status
    /// chosen by axum (400, 415 or 422) and reports the reason under `detail`.
    #[error("Malformed request body: {detail}")]
    MalformedBody { status: StatusCode, detail: String },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Fields(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::Batch(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::MalformedBody { status, detail } => {
                (status, Json(DetailDto { detail })).into_response()
            }
        }
    }
}

impl From<BatchError> for ValidationError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::NotAList(errors) => Self::Fields(errors),
            BatchError::Entries(errors) => Self::Batch(errors),
        }
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}
