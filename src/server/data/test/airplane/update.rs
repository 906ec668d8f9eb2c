use super::*;

/// Tests overwriting a stored airplane.
///
/// Verifies new passenger count, metrics and timestamps are written.
///
/// Expected: Ok with updated airplane
#[tokio::test]
async fn updates_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now() - Duration::hours(1);
    factory::airplane::AirplaneFactory::new(db, 4)
        .no_of_passengers(10)
        .created_at(created_at)
        .updated_at(created_at)
        .build()
        .await?;

    let repo = AirplaneRepository::new(db);
    let current = repo.get(4).await?.unwrap();
    let stored_created_at = current.created_at;
    let changed = current.with_passengers(50, Utc::now());

    let updated = repo.update(&changed).await?;

    assert_eq!(updated.no_of_passengers, 50);
    assert_eq!(updated.metrics, changed.metrics);
    assert_eq!(updated.created_at, stored_created_at);
    assert!(updated.updated_at > created_at);

    let db_airplane = entity::prelude::Airplane::find_by_id(4).one(db).await?.unwrap();
    assert_eq!(db_airplane.no_of_passengers, 50);

    Ok(())
}

/// Tests updating an airplane that does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirplaneRepository::new(db);
    let result = repo
        .update(&crate::server::model::airplane::Airplane::new(1, 1, Utc::now()))
        .await;

    assert!(result.is_err());

    Ok(())
}
