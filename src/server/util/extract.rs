use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::server::error::{validation::ValidationError, AppError};

/// Request body parsed as untyped JSON.
///
/// Works like `Json<Value>` but rejects with `AppError`, so an unparsable body or a
/// missing `Content-Type: application/json` is answered with a JSON `{detail}` body.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(ValidationError::from)?;

        Ok(Self(value))
    }
}
