use super::*;
use crate::server::{data::airplane::AirplaneRepository, service::airplane::duplicate_key_or};
use sea_orm::DbErr;

/// Tests mapping the store's rejection of a second insert under the same id.
///
/// Simulates a concurrent create that slipped past the existence check.
///
/// Expected: AppError::AirplaneErr(DuplicateKey(3))
#[tokio::test]
async fn maps_unique_violation_to_duplicate_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Airplane)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airplane(db, 3).await?;

    let repo = AirplaneRepository::new(db);
    let err = repo
        .insert(&crate::server::model::airplane::Airplane::new(3, 99, Utc::now()))
        .await
        .unwrap_err();

    assert!(matches!(
        duplicate_key_or(err, 3),
        AppError::AirplaneErr(AirplaneError::DuplicateKey(3))
    ));

    Ok(())
}

/// Tests that other database errors pass through unchanged.
///
/// Expected: AppError::DbErr
#[test]
fn keeps_other_database_errors() {
    let err = DbErr::Custom("connection lost".to_string());

    assert!(matches!(duplicate_key_or(err, 3), AppError::DbErr(_)));
}
