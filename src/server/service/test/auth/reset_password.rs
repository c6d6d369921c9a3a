use super::*;

/// Extracts the raw reset token from the emailed reset URL.
fn token_from_email(mailer: &MemoryMailer) -> String {
    let sent = mailer.sent.lock().unwrap();
    sent[0]
        .text
        .rsplit('/')
        .next()
        .unwrap()
        .trim()
        .to_string()
}

/// Tests resetting the password with the emailed token.
///
/// Expected: Ok, new password accepted, token cleared and unusable a second time
#[tokio::test]
async fn resets_password_with_emailed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let mailer = MemoryMailer::default();
    let user = UserFactory::new(db).email("john@gmail.com").build().await?;
    let service = AuthService::new(db, &jwt, 4);

    service
        .forgot_password(&mailer, "john@gmail.com", RESET_URL)
        .await?;
    let token = token_from_email(&mailer);

    let (reset_user, new_token) = service
        .reset_password(&token, "abcdef".to_string())
        .await?;

    assert_eq!(reset_user.id, user.id);
    assert!(reset_user.reset_password_token.is_none());
    assert_eq!(jwt.verify_token(&new_token)?.user_id()?, user.id);
    assert!(service
        .login(Some("john@gmail.com".to_string()), Some("abcdef".to_string()))
        .await
        .is_ok());

    let reused = service.reset_password(&token, "ghijkl".to_string()).await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::InvalidResetToken))
    ));

    Ok(())
}

/// Tests resetting with a token that was never issued.
///
/// Expected: Err(AuthError::InvalidResetToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    factory::create_user(db).await?;

    let result = AuthService::new(db, &jwt, 4)
        .reset_password("deadbeef", "abcdef".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidResetToken))
    ));

    Ok(())
}
