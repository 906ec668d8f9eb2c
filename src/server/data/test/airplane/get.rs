use super::*;

/// Tests fetching an existing airplane.
///
/// Verifies that stored columns, including the derived metrics, are mapped back into
/// the domain model.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_existing_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::airplane::AirplaneFactory::new(db, 5)
        .no_of_passengers(3)
        .build()
        .await?;

    let repo = AirplaneRepository::new(db);
    let airplane = repo.get(5).await?.unwrap();

    assert_eq!(airplane.id, 5);
    assert_eq!(airplane.no_of_passengers, 3);
    assert_eq!(airplane.metrics.fuel_tank_capacity_in_liters, 1000.0);
    assert_eq!(
        airplane.metrics.maximum_minutes_to_fly,
        stored.maximum_minutes_to_fly
    );

    Ok(())
}

/// Tests fetching an id that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airplane(db, 1).await?;

    let repo = AirplaneRepository::new(db);
    let result = repo.get(2).await?;

    assert!(result.is_none());

    Ok(())
}
