use super::*;

fn entry(id: i32, no_of_passengers: i32) -> CreateAirplaneParams {
    CreateAirplaneParams {
        id,
        no_of_passengers,
    }
}

/// Tests creating a batch of airplanes.
///
/// Expected: Ok with every airplane in request order
#[tokio::test]
async fn creates_every_airplane() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AirplaneService::new(db);
    let created = service
        .bulk_create(vec![entry(3, 30), entry(1, 10), entry(2, 20)])
        .await?;

    let ids: Vec<i32> = created.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(created[0].metrics, FlightMetrics::calculate(3, 30));
    assert_eq!(service.list_all().await?.len(), 3);

    Ok(())
}

/// Tests that a stored id rolls back the whole batch.
///
/// Expected: Err(DuplicateKey) and none of the new airplanes stored
#[tokio::test]
async fn rolls_back_on_stored_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airplane(db, 2).await?;

    let service = AirplaneService::new(db);
    let result = service
        .bulk_create(vec![entry(1, 10), entry(2, 20), entry(3, 30)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AirplaneErr(AirplaneError::DuplicateKey(2)))
    ));

    let ids: Vec<i32> = service.list_all().await?.into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2]);

    Ok(())
}

/// Tests that an id repeated within the batch rolls back the whole batch.
///
/// Expected: Err(DuplicateKey) and an empty store
#[tokio::test]
async fn rolls_back_on_duplicate_within_batch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AirplaneService::new(db);
    let result = service
        .bulk_create(vec![entry(4, 1), entry(5, 1), entry(4, 2)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AirplaneErr(AirplaneError::DuplicateKey(4)))
    ));
    assert!(service.list_all().await?.is_empty());

    Ok(())
}

/// Tests an empty batch.
///
/// Expected: Ok with nothing created
#[tokio::test]
async fn accepts_empty_batch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AirplaneService::new(db);

    assert!(service.bulk_create(Vec::new()).await?.is_empty());

    Ok(())
}
