//! Airplane service for record management.
//!
//! Enforces id uniqueness on create and update, derives flight metrics on every write
//! and wraps multi-step writes (moving a record to a new id, bulk inserts) in a single
//! database transaction.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait,
};

use crate::server::{
    data::airplane::AirplaneRepository,
    error::{airplane::AirplaneError, validation::ValidationError, AppError},
    model::airplane::{Airplane, CreateAirplaneParams, DeleteAllOutcome, UpdateAirplaneParams},
    util::validation::{FieldErrors, REQUIRED},
};

pub struct AirplaneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirplaneService<'a> {
    /// Creates a new AirplaneService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an airplane under its caller-supplied id.
    ///
    /// # Returns
    /// - `Ok(Airplane)` - The stored airplane with derived metrics
    /// - `Err(AppError::AirplaneErr(DuplicateKey))` - Id already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateAirplaneParams) -> Result<Airplane, AppError> {
        let repo = AirplaneRepository::new(self.db);

        if repo.exists(params.id).await? {
            return Err(AirplaneError::DuplicateKey(params.id).into());
        }

        let airplane = Airplane::new(params.id, params.no_of_passengers, Utc::now());
        let created = repo
            .insert(&airplane)
            .await
            .map_err(|err| duplicate_key_or(err, params.id))?;

        tracing::info!(
            "Created airplane {} with {} passengers",
            created.id,
            created.no_of_passengers
        );

        Ok(created)
    }

    /// Updates the airplane stored under `params.target_id`.
    ///
    /// With an unchanged id the passenger count is replaced (or kept when omitted), the
    /// metrics are recomputed and `created_at` is preserved. With a new id the record is
    /// deleted and recreated under that id in one transaction, which resets `created_at`.
    ///
    /// # Returns
    /// - `Ok(Airplane)` - The updated airplane
    /// - `Err(AppError::AirplaneErr(NotFound))` - No airplane under `target_id`
    /// - `Err(AppError::AirplaneErr(DuplicateKey))` - New id already in use
    /// - `Err(AppError::ValidationErr)` - New id given without a passenger count
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateAirplaneParams) -> Result<Airplane, AppError> {
        let repo = AirplaneRepository::new(self.db);

        let current = repo
            .get(params.target_id)
            .await?
            .ok_or(AirplaneError::NotFound(params.target_id))?;
        let now = Utc::now();

        if params.id == params.target_id {
            let no_of_passengers = params
                .no_of_passengers
                .unwrap_or(current.no_of_passengers);
            let updated = repo
                .update(&current.with_passengers(no_of_passengers, now))
                .await?;

            tracing::info!(
                "Updated airplane {} to {} passengers",
                updated.id,
                updated.no_of_passengers
            );

            return Ok(updated);
        }

        let Some(no_of_passengers) = params.no_of_passengers else {
            return Err(ValidationError::Fields(FieldErrors::from([(
                "no_of_passengers".to_string(),
                vec![REQUIRED.to_string()],
            )]))
            .into());
        };

        let txn = self.db.begin().await?;
        let result = move_airplane(&txn, params.target_id, params.id, no_of_passengers, now).await;

        match result {
            Ok(moved) => {
                txn.commit().await?;
                tracing::info!("Moved airplane {} to id {}", params.target_id, moved.id);
                Ok(moved)
            }
            Err(err) => Err(rollback_or_log(txn, err).await),
        }
    }

    /// Gets an airplane by id.
    ///
    /// # Returns
    /// - `Ok(Airplane)` - Airplane found
    /// - `Err(AppError::AirplaneErr(NotFound))` - No airplane with this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, id: i32) -> Result<Airplane, AppError> {
        let repo = AirplaneRepository::new(self.db);

        let airplane = repo.get(id).await?.ok_or(AirplaneError::NotFound(id))?;

        Ok(airplane)
    }

    /// Gets all airplanes, most recently updated first.
    pub async fn list_all(&self) -> Result<Vec<Airplane>, AppError> {
        let repo = AirplaneRepository::new(self.db);

        Ok(repo.list_all().await?)
    }

    /// Deletes an airplane by id.
    ///
    /// # Returns
    /// - `Ok(())` - Airplane deleted
    /// - `Err(AppError::AirplaneErr(NotFound))` - No airplane with this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AirplaneRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AirplaneError::NotFound(id).into());
        }

        tracing::info!("Deleted airplane {}", id);

        Ok(())
    }

    /// Deletes every airplane.
    ///
    /// An empty store is not an error; the outcome tells the two cases apart.
    pub async fn delete_all(&self) -> Result<DeleteAllOutcome, AppError> {
        let repo = AirplaneRepository::new(self.db);

        let deleted = repo.delete_all().await?;
        if deleted == 0 {
            return Ok(DeleteAllOutcome::AlreadyEmpty);
        }

        tracing::info!("Deleted all {} airplanes", deleted);

        Ok(DeleteAllOutcome::Deleted(deleted))
    }

    /// Creates a batch of airplanes, all or nothing.
    ///
    /// Entries are inserted in order inside one transaction. Any id that is already
    /// stored, or that appears twice in the batch, rolls back the whole batch.
    ///
    /// # Returns
    /// - `Ok(Vec<Airplane>)` - Every airplane created, in request order
    /// - `Err(AppError::AirplaneErr(DuplicateKey))` - An id collided; nothing was written
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn bulk_create(
        &self,
        params: Vec<CreateAirplaneParams>,
    ) -> Result<Vec<Airplane>, AppError> {
        let txn = self.db.begin().await?;
        let result = insert_batch(&txn, &params, Utc::now()).await;

        match result {
            Ok(created) => {
                txn.commit().await?;
                tracing::info!("Created {} airplanes in bulk", created.len());
                Ok(created)
            }
            Err(err) => Err(rollback_or_log(txn, err).await),
        }
    }
}

async fn move_airplane<C: ConnectionTrait>(
    db: &C,
    from_id: i32,
    to_id: i32,
    no_of_passengers: i32,
    now: DateTime<Utc>,
) -> Result<Airplane, AppError> {
    let repo = AirplaneRepository::new(db);

    if repo.exists(to_id).await? {
        return Err(AirplaneError::DuplicateKey(to_id).into());
    }

    repo.delete(from_id).await?;

    let moved = repo
        .insert(&Airplane::new(to_id, no_of_passengers, now))
        .await
        .map_err(|err| duplicate_key_or(err, to_id))?;

    Ok(moved)
}

async fn insert_batch<C: ConnectionTrait>(
    db: &C,
    params: &[CreateAirplaneParams],
    now: DateTime<Utc>,
) -> Result<Vec<Airplane>, AppError> {
    let repo = AirplaneRepository::new(db);
    let mut seen = HashSet::with_capacity(params.len());
    let mut created = Vec::with_capacity(params.len());

    for entry in params {
        if !seen.insert(entry.id) || repo.exists(entry.id).await? {
            return Err(AirplaneError::DuplicateKey(entry.id).into());
        }

        let airplane = repo
            .insert(&Airplane::new(entry.id, entry.no_of_passengers, now))
            .await
            .map_err(|err| duplicate_key_or(err, entry.id))?;
        created.push(airplane);
    }

    Ok(created)
}

/// Rolls back `txn` after `err` and hands `err` back.
///
/// A failed rollback is logged; the caller still sees the error that aborted the
/// transaction.
pub(super) async fn rollback_or_log(txn: DatabaseTransaction, err: AppError) -> AppError {
    if let Err(rollback_err) = txn.rollback().await {
        tracing::error!("Failed to roll back transaction after {}: {}", err, rollback_err);
    }

    err
}

/// Maps a unique constraint violation on insert to `DuplicateKey`.
///
/// Covers a concurrent insert of the same id between the existence check and the write.
pub(super) fn duplicate_key_or(err: DbErr, id: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AirplaneError::DuplicateKey(id).into(),
        _ => err.into(),
    }
}
