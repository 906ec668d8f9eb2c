use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with an id assigned and fields stored verbatim
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("jdoe")).await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "jdoe");
    assert_eq!(user.first_name, "John");
    assert_eq!(user.password_hash, "salt$digest");

    Ok(())
}

/// Tests creating a user whose username is taken.
///
/// Verifies the unique constraint on `username` rejects the insert.
///
/// Expected: Err(DbErr) reporting a unique constraint violation
#[tokio::test]
async fn fails_for_taken_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("jdoe")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.create(params("jdoe")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
