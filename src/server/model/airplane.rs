//! Airplane domain models, flight metric derivation and operation parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::airplane::{AirplaneDto, CreateAirplaneDto, UpdateAirplaneDto},
    server::util::validation::{FieldErrors, ObjectValidator},
};

/// Liters of fuel tank capacity per unit of airplane id.
const TANK_LITERS_PER_ID: f64 = 200.0;
/// Multiplier applied to `ln(id)` for the base fuel consumption per minute.
const BASE_CONSUMPTION_FACTOR: f64 = 0.80;
/// Additional fuel consumption per minute for each passenger on board.
const CONSUMPTION_PER_PASSENGER: f64 = 0.002;

/// Flight capability figures derived from an airplane's id and passenger count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightMetrics {
    pub fuel_tank_capacity_in_liters: f64,
    pub fuel_consumption_per_minute: f64,
    pub maximum_minutes_to_fly: f64,
}

impl FlightMetrics {
    /// Derives the flight metrics for an airplane.
    ///
    /// Both arguments must be at least 1, which request validation guarantees. With
    /// those bounds the consumption rate is always positive.
    ///
    /// # Arguments
    /// - `id` - Airplane identifier
    /// - `no_of_passengers` - Number of passengers on board
    ///
    /// # Returns
    /// - `FlightMetrics` - Tank capacity, consumption per minute and maximum flight time
    pub fn calculate(id: i32, no_of_passengers: i32) -> Self {
        let id = f64::from(id);

        let fuel_tank_capacity_in_liters = id * TANK_LITERS_PER_ID;
        let fuel_consumption_per_minute = id.ln() * BASE_CONSUMPTION_FACTOR
            + CONSUMPTION_PER_PASSENGER * f64::from(no_of_passengers);
        let maximum_minutes_to_fly = fuel_tank_capacity_in_liters / fuel_consumption_per_minute;

        Self {
            fuel_tank_capacity_in_liters,
            fuel_consumption_per_minute,
            maximum_minutes_to_fly,
        }
    }
}

/// Airplane record with its derived flight metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Airplane {
    pub id: i32,
    pub no_of_passengers: i32,
    pub metrics: FlightMetrics,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Airplane {
    /// Builds a new airplane record stamped with `now`, deriving its metrics.
    pub fn new(id: i32, no_of_passengers: i32, now: DateTime<Utc>) -> Self {
        Self {
            id,
            no_of_passengers,
            metrics: FlightMetrics::calculate(id, no_of_passengers),
            created_at: now,
            updated_at: now,
        }
    }

    /// Changes the passenger count in place and recomputes the metrics.
    ///
    /// `created_at` is preserved and `updated_at` advances to `now`.
    pub fn with_passengers(self, no_of_passengers: i32, now: DateTime<Utc>) -> Self {
        Self {
            no_of_passengers,
            metrics: FlightMetrics::calculate(self.id, no_of_passengers),
            updated_at: now,
            ..self
        }
    }

    /// Converts an entity model to an airplane domain model at the repository boundary.
    pub fn from_entity(entity: entity::airplane::Model) -> Self {
        Self {
            id: entity.id,
            no_of_passengers: entity.no_of_passengers,
            metrics: FlightMetrics {
                fuel_tank_capacity_in_liters: entity.fuel_tank_capacity_in_liters,
                fuel_consumption_per_minute: entity.fuel_consumption_per_minute,
                maximum_minutes_to_fly: entity.maximum_minutes_to_fly,
            },
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the airplane domain model to a DTO for API responses.
    pub fn into_dto(self) -> AirplaneDto {
        AirplaneDto {
            id: self.id,
            no_of_passengers: self.no_of_passengers,
            fuel_tank_capacity_in_liters: self.metrics.fuel_tank_capacity_in_liters,
            fuel_consumption_per_minute: self.metrics.fuel_consumption_per_minute,
            maximum_minutes_to_fly: self.metrics.maximum_minutes_to_fly,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating an airplane with a caller-supplied id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreateAirplaneParams {
    pub id: i32,
    pub no_of_passengers: i32,
}

impl CreateAirplaneParams {
    /// Converts a validated create DTO into parameters.
    pub fn from_dto(dto: CreateAirplaneDto) -> Self {
        Self {
            id: dto.id,
            no_of_passengers: dto.no_of_passengers,
        }
    }
}

/// Parameters for updating the airplane stored under `target_id`.
///
/// When `id` differs from `target_id` the record is moved to the new id, which
/// requires `no_of_passengers`. When the id is unchanged an omitted passenger count
/// keeps the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateAirplaneParams {
    /// Id of the airplane being updated, taken from the request path.
    pub target_id: i32,
    /// Id the airplane should have after the update.
    pub id: i32,
    /// New passenger count, if supplied.
    pub no_of_passengers: Option<i32>,
}

impl UpdateAirplaneParams {
    /// Converts a validated update DTO into parameters for the airplane at `target_id`.
    pub fn from_dto(target_id: i32, dto: UpdateAirplaneDto) -> Self {
        Self {
            target_id,
            id: dto.id,
            no_of_passengers: dto.no_of_passengers,
        }
    }
}

/// Result of deleting every airplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAllOutcome {
    /// There was nothing to delete.
    AlreadyEmpty,
    /// The given number of airplanes were deleted.
    Deleted(u64),
}

impl CreateAirplaneDto {
    /// Validates a JSON body as an airplane create request.
    ///
    /// # Returns
    /// - `Ok(CreateAirplaneDto)` - Both fields are integers of at least 1
    /// - `Err(FieldErrors)` - Messages for every invalid field
    pub fn from_json(value: &Value) -> Result<Self, FieldErrors> {
        let mut fields = ObjectValidator::new(value)?;
        let id = fields.integer("id", 1);
        let no_of_passengers = fields.integer("no_of_passengers", 1);

        let parsed = id
            .zip(no_of_passengers)
            .map(|(id, no_of_passengers)| Self {
                id,
                no_of_passengers,
            });
        fields.finish(parsed)
    }
}

impl UpdateAirplaneDto {
    /// Validates a JSON body as an airplane update request.
    ///
    /// `id` is required; `no_of_passengers` may be omitted.
    pub fn from_json(value: &Value) -> Result<Self, FieldErrors> {
        let mut fields = ObjectValidator::new(value)?;
        let id = fields.integer("id", 1);
        let no_of_passengers = fields.optional_integer("no_of_passengers", 1);

        let parsed = id.map(|id| Self {
            id,
            no_of_passengers,
        });
        fields.finish(parsed)
    }
}
