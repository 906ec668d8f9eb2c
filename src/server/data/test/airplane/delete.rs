use super::*;

/// Tests deleting an airplane.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airplane(db, 1).await?;
    factory::create_airplane(db, 2).await?;

    let repo = AirplaneRepository::new(db);
    let deleted = repo.delete(1).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::Airplane::find_by_id(1).one(db).await?.is_none());
    assert!(entity::prelude::Airplane::find_by_id(2).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirplaneRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
