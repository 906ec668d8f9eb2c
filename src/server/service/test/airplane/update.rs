use super::*;

/// Tests updating the passenger count of an airplane in place.
///
/// Verifies metrics are recomputed, `created_at` is preserved and `updated_at`
/// advances.
///
/// Expected: Ok with updated airplane
#[tokio::test]
async fn updates_passengers_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now() - Duration::hours(1);
    factory::airplane::AirplaneFactory::new(db, 5)
        .no_of_passengers(10)
        .created_at(created_at)
        .updated_at(created_at)
        .build()
        .await?;

    let service = AirplaneService::new(db);
    let before = service.get(5).await?;
    let airplane = service
        .update(UpdateAirplaneParams {
            target_id: 5,
            id: 5,
            no_of_passengers: Some(3),
        })
        .await?;

    assert_eq!(airplane.no_of_passengers, 3);
    assert_eq!(airplane.metrics, FlightMetrics::calculate(5, 3));
    assert_eq!(airplane.created_at, before.created_at);
    assert!(airplane.updated_at > before.updated_at);

    Ok(())
}

/// Tests a partial update that omits the passenger count.
///
/// Expected: Ok with the passenger count kept and metrics recomputed
#[tokio::test]
async fn keeps_passengers_when_omitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::airplane::AirplaneFactory::new(db, 6)
        .no_of_passengers(42)
        .build()
        .await?;

    let service = AirplaneService::new(db);
    let airplane = service
        .update(UpdateAirplaneParams {
            target_id: 6,
            id: 6,
            no_of_passengers: None,
        })
        .await?;

    assert_eq!(airplane.no_of_passengers, 42);
    assert_eq!(airplane.metrics, FlightMetrics::calculate(6, 42));

    Ok(())
}

/// Tests moving an airplane to a free id.
///
/// Verifies the old record is gone and the new one carries fresh metrics and a new
/// creation time.
///
/// Expected: Ok with airplane under the new id
#[tokio::test]
async fn moves_airplane_to_new_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now() - Duration::hours(1);
    factory::airplane::AirplaneFactory::new(db, 2)
        .created_at(created_at)
        .updated_at(created_at)
        .build()
        .await?;

    let service = AirplaneService::new(db);
    let airplane = service
        .update(UpdateAirplaneParams {
            target_id: 2,
            id: 20,
            no_of_passengers: Some(7),
        })
        .await?;

    assert_eq!(airplane.id, 20);
    assert_eq!(airplane.metrics, FlightMetrics::calculate(20, 7));
    assert!(airplane.created_at > created_at);

    assert!(entity::prelude::Airplane::find_by_id(2).one(db).await?.is_none());
    assert!(entity::prelude::Airplane::find_by_id(20).one(db).await?.is_some());

    Ok(())
}

/// Tests moving an airplane onto an id that is already stored.
///
/// Expected: Err(DuplicateKey) with both records untouched
#[tokio::test]
async fn fails_when_new_id_is_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::airplane::AirplaneFactory::new(db, 1)
        .no_of_passengers(11)
        .build()
        .await?;
    factory::airplane::AirplaneFactory::new(db, 2)
        .no_of_passengers(22)
        .build()
        .await?;

    let service = AirplaneService::new(db);
    let result = service
        .update(UpdateAirplaneParams {
            target_id: 1,
            id: 2,
            no_of_passengers: Some(5),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AirplaneErr(AirplaneError::DuplicateKey(2)))
    ));

    let first = entity::prelude::Airplane::find_by_id(1).one(db).await?.unwrap();
    let second = entity::prelude::Airplane::find_by_id(2).one(db).await?.unwrap();
    assert_eq!(first.no_of_passengers, 11);
    assert_eq!(second.no_of_passengers, 22);

    Ok(())
}

/// Tests moving an airplane without supplying a passenger count.
///
/// Expected: Err(ValidationErr) naming `no_of_passengers`
#[tokio::test]
async fn requires_passengers_when_moving() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airplane(db, 3).await?;

    let service = AirplaneService::new(db);
    let result = service
        .update(UpdateAirplaneParams {
            target_id: 3,
            id: 4,
            no_of_passengers: None,
        })
        .await;

    match result {
        Err(AppError::ValidationErr(ValidationError::Fields(errors))) => {
            assert!(errors.contains_key("no_of_passengers"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(entity::prelude::Airplane::find_by_id(3).one(db).await?.is_some());

    Ok(())
}

/// Tests updating an unknown airplane.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_airplane() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AirplaneService::new(db);
    let result = service
        .update(UpdateAirplaneParams {
            target_id: 8,
            id: 8,
            no_of_passengers: Some(1),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AirplaneErr(AirplaneError::NotFound(8)))
    ));

    Ok(())
}
