use super::*;

/// Tests logging in with the registered password.
///
/// Verifies the issued token carries the user's identity.
///
/// Expected: Ok with user and a verifiable token
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let service = UserService::new(db, &tokens);
    let registered = service.register(registration("jdoe", "hunter2")).await?;

    let (user, token) = service.login("jdoe", "hunter2").await?;

    assert_eq!(user.id, registered.id);
    let claims = tokens.verify(&token)?;
    assert_eq!(claims.id, registered.id);
    assert_eq!(claims.username, "jdoe");
    assert_eq!(claims.name, "John Doe");

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn fails_for_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let service = UserService::new(db, &tokens);
    service.register(registration("jdoe", "hunter2")).await?;

    let result = service.login("jdoe", "wrong").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in as an unknown user.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    factory::create_user(db).await?;

    let service = UserService::new(db, &tokens);
    let result = service.login("nobody", "hunter2").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
