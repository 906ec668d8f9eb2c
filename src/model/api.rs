use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body for failures without a field-level breakdown.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned by authentication failures.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DetailDto {
    pub detail: String,
}

/// Body carrying a single human-readable outcome message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
