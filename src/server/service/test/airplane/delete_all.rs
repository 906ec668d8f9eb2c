use super::*;

/// Tests deleting all airplanes.
///
/// Expected: Ok(Deleted(n)) with an empty store afterwards
#[tokio::test]
async fn deletes_every_airplane() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airplane(db, 1).await?;
    factory::create_airplane(db, 2).await?;

    let service = AirplaneService::new(db);
    let outcome = service.delete_all().await?;

    assert_eq!(outcome, DeleteAllOutcome::Deleted(2));
    assert!(service.list_all().await?.is_empty());

    Ok(())
}

/// Tests deleting all airplanes from an empty store.
///
/// Expected: Ok(AlreadyEmpty)
#[tokio::test]
async fn reports_already_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AirplaneService::new(db);

    assert_eq!(service.delete_all().await?, DeleteAllOutcome::AlreadyEmpty);

    Ok(())
}
