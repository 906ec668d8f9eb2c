use super::*;

/// Tests registering a new user.
///
/// Verifies the password is stored hashed rather than verbatim.
///
/// Expected: Ok with the user created
#[tokio::test]
async fn registers_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let service = UserService::new(db, &tokens);
    let user = service.register(registration("jdoe", "hunter2")).await?;

    assert_eq!(user.username, "jdoe");
    assert_eq!(user.first_name, "John");
    assert_ne!(user.password_hash, "hunter2");
    assert!(user.password_hash.starts_with("$argon2id$"));

    Ok(())
}

/// Tests registering a username that is already taken.
///
/// Expected: Err(UsernameTaken)
#[tokio::test]
async fn fails_for_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    factory::user::UserFactory::new(db)
        .username("jdoe")
        .build()
        .await?;

    let service = UserService::new(db, &tokens);
    let result = service.register(registration("jdoe", "hunter2")).await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::UsernameTaken(ref name))) if name == "jdoe"
    ));

    Ok(())
}
