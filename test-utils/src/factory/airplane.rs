//! Airplane factory for creating test airplane entities.
//!
//! Derived fuel columns default to the values the API itself would compute for the
//! chosen id and passenger count, so rows created here look like rows written by
//! the service.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airplanes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::airplane::AirplaneFactory;
///
/// let airplane = AirplaneFactory::new(&db, 3)
///     .no_of_passengers(40)
///     .build()
///     .await?;
/// ```
pub struct AirplaneFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    no_of_passengers: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> AirplaneFactory<'a> {
    /// Creates a new AirplaneFactory with default values.
    ///
    /// Defaults:
    /// - no_of_passengers: `1`
    /// - created_at / updated_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `id` - Caller-supplied airplane id (must be >= 1)
    pub fn new(db: &'a DatabaseConnection, id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            id,
            no_of_passengers: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the passenger count.
    pub fn no_of_passengers(mut self, no_of_passengers: i32) -> Self {
        self.no_of_passengers = no_of_passengers;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the last update timestamp.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the airplane entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::airplane::Model)` - Created airplane entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate id)
    pub async fn build(self) -> Result<entity::airplane::Model, DbErr> {
        let tank = f64::from(self.id) * 200.0;
        let consumption =
            f64::from(self.id).ln() * 0.80 + 0.002 * f64::from(self.no_of_passengers);

        entity::airplane::ActiveModel {
            id: ActiveValue::Set(self.id),
            no_of_passengers: ActiveValue::Set(self.no_of_passengers),
            fuel_tank_capacity_in_liters: ActiveValue::Set(tank),
            fuel_consumption_per_minute: ActiveValue::Set(consumption),
            maximum_minutes_to_fly: ActiveValue::Set(tank / consumption),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airplane with default values.
///
/// Shorthand for `AirplaneFactory::new(db, id).build().await`.
pub async fn create_airplane(
    db: &DatabaseConnection,
    id: i32,
) -> Result<entity::airplane::Model, DbErr> {
    AirplaneFactory::new(db, id).build().await
}
