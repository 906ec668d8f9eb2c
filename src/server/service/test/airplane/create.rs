use super::*;

/// Tests creating an airplane.
///
/// Verifies that the derived metrics are computed from the id and passenger count.
///
/// Expected: Ok with tank 200, consumption 0.002 and 100000 minutes for (1, 1)
#[tokio::test]
async fn creates_airplane_with_derived_metrics() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AirplaneService::new(db);
    let airplane = service
        .create(CreateAirplaneParams {
            id: 1,
            no_of_passengers: 1,
        })
        .await?;

    assert_eq!(airplane.id, 1);
    assert_eq!(airplane.metrics.fuel_tank_capacity_in_liters, 200.0);
    assert!((airplane.metrics.fuel_consumption_per_minute - 0.002).abs() < 1e-9);
    assert!((airplane.metrics.maximum_minutes_to_fly - 100_000.0).abs() < 1e-6);
    assert_eq!(airplane.created_at, airplane.updated_at);

    Ok(())
}

/// Tests creating an airplane under an id that is already stored.
///
/// Expected: Err(DuplicateKey) and the stored record is unchanged
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::airplane::AirplaneFactory::new(db, 2)
        .no_of_passengers(10)
        .build()
        .await?;

    let service = AirplaneService::new(db);
    let result = service
        .create(CreateAirplaneParams {
            id: 2,
            no_of_passengers: 99,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AirplaneErr(AirplaneError::DuplicateKey(2)))
    ));

    let stored = entity::prelude::Airplane::find_by_id(2).one(db).await?.unwrap();
    assert_eq!(stored.no_of_passengers, 10);

    Ok(())
}
