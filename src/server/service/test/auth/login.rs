use super::*;

/// Tests logging in with valid credentials, email matched case-insensitively.
///
/// Expected: Ok with the user and a valid token
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = UserFactory::new(db).email("john@gmail.com").build().await?;

    let (logged_in, token) = AuthService::new(db, &jwt, 4)
        .login(Some("John@Gmail.com".to_string()), Some("123456".to_string()))
        .await?;

    assert_eq!(logged_in.id, user.id);
    assert_eq!(jwt.verify_token(&token)?.user_id()?, user.id);

    Ok(())
}

/// Tests logging in with a wrong password and with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    UserFactory::new(db).email("john@gmail.com").build().await?;
    let service = AuthService::new(db, &jwt, 4);

    let wrong_password = service
        .login(Some("john@gmail.com".to_string()), Some("654321".to_string()))
        .await;
    let unknown_email = service
        .login(Some("jane@gmail.com".to_string()), Some("123456".to_string()))
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in without a password.
///
/// Expected: Err(AuthError::MissingCredentials)
#[tokio::test]
async fn rejects_missing_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let result = AuthService::new(db, &jwt, 4)
        .login(Some("john@gmail.com".to_string()), None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));

    Ok(())
}
