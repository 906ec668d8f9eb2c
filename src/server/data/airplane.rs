//! Airplane data repository for database operations.
//!
//! Provides `AirplaneRepository` for reading and writing airplane records. Derived
//! flight metrics are stored alongside the caller-supplied fields so listings do not
//! need to recompute them.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::airplane::Airplane;

/// Repository providing database operations for airplanes.
///
/// Accepts any SeaORM connection, so it can be used with the shared pool or with an
/// open transaction.
pub struct AirplaneRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirplaneRepository<'a, C> {
    /// Creates a new AirplaneRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets an airplane by id.
    ///
    /// # Returns
    /// - `Ok(Some(Airplane))` - Airplane found
    /// - `Ok(None)` - No airplane with this id
    /// - `Err(DbErr)` - Database error
    pub async fn get(&self, id: i32) -> Result<Option<Airplane>, DbErr> {
        let entity = entity::prelude::Airplane::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Airplane::from_entity))
    }

    /// Checks whether an airplane with this id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Airplane::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new airplane record.
    ///
    /// # Returns
    /// - `Ok(Airplane)` - The stored airplane
    /// - `Err(DbErr)` - Database error, including a unique constraint violation when the
    ///   id is already taken
    pub async fn insert(&self, airplane: &Airplane) -> Result<Airplane, DbErr> {
        let entity = active_model(airplane).insert(self.db).await?;

        Ok(Airplane::from_entity(entity))
    }

    /// Overwrites the stored airplane that has the same id.
    ///
    /// # Returns
    /// - `Ok(Airplane)` - The updated airplane
    /// - `Err(DbErr::RecordNotUpdated)` - No airplane with this id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, airplane: &Airplane) -> Result<Airplane, DbErr> {
        let entity = active_model(airplane).update(self.db).await?;

        Ok(Airplane::from_entity(entity))
    }

    /// Deletes an airplane by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 when the id did not exist
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Airplane::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every airplane and returns how many were removed.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Airplane::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets all airplanes, most recently updated first.
    ///
    /// Ties are broken by most recently created, then by descending id.
    pub async fn list_all(&self) -> Result<Vec<Airplane>, DbErr> {
        let entities = entity::prelude::Airplane::find()
            .order_by_desc(entity::airplane::Column::UpdatedAt)
            .order_by_desc(entity::airplane::Column::CreatedAt)
            .order_by_desc(entity::airplane::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Airplane::from_entity).collect())
    }

    /// Counts stored airplanes.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Airplane::find().count(self.db).await
    }
}

fn active_model(airplane: &Airplane) -> entity::airplane::ActiveModel {
    entity::airplane::ActiveModel {
        id: ActiveValue::Set(airplane.id),
        no_of_passengers: ActiveValue::Set(airplane.no_of_passengers),
        fuel_tank_capacity_in_liters: ActiveValue::Set(
            airplane.metrics.fuel_tank_capacity_in_liters,
        ),
        fuel_consumption_per_minute: ActiveValue::Set(
            airplane.metrics.fuel_consumption_per_minute,
        ),
        maximum_minutes_to_fly: ActiveValue::Set(airplane.metrics.maximum_minutes_to_fly),
        created_at: ActiveValue::Set(airplane.created_at),
        updated_at: ActiveValue::Set(airplane.updated_at),
    }
}
