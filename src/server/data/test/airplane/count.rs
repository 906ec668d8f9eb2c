use super::*;

/// Tests counting stored airplanes.
///
/// Expected: Ok with the number of rows
#[tokio::test]
async fn counts_airplanes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirplaneRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_airplane(db, 10).await?;
    factory::create_airplane(db, 20).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
