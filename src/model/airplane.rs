use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Airplane record as returned by every airplane endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirplaneDto {
    pub id: i32,
    pub no_of_passengers: i32,
    pub fuel_tank_capacity_in_liters: f64,
    pub fuel_consumption_per_minute: f64,
    pub maximum_minutes_to_fly: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated body of a create request (or one entry of a bulk create).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateAirplaneDto {
    #[schema(minimum = 1)]
    pub id: i32,
    #[schema(minimum = 1)]
    pub no_of_passengers: i32,
}

/// Validated body of an update request.
///
/// `no_of_passengers` may be omitted when `id` matches the airplane being updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateAirplaneDto {
    #[schema(minimum = 1)]
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1)]
    pub no_of_passengers: Option<i32>,
}

/// Hyperlinks to follow-up operations on an airplane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirplaneActionsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
    pub delete: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AirplaneDetailDto {
    pub airplane: AirplaneDto,
    pub actions: AirplaneActionsDto,
}

/// Response of create and update, a detail plus an outcome message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AirplaneChangedDto {
    pub message: String,
    pub airplane: AirplaneDto,
    pub actions: AirplaneActionsDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AirplaneListDto {
    pub airplanes: Vec<AirplaneDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AirplanesCreatedDto {
    pub message: String,
    pub airplanes: Vec<AirplaneDto>,
}
