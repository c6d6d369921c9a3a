use super::*;

/// Tests requesting a password reset for an existing account.
///
/// Expected: Ok, one email containing the reset URL, token digest stored with expiry
#[tokio::test]
async fn emails_reset_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let mailer = MemoryMailer::default();
    let user = UserFactory::new(db).email("john@gmail.com").build().await?;

    AuthService::new(db, &jwt, 4)
        .forgot_password(&mailer, "john@gmail.com", RESET_URL)
        .await?;

    let sent = mailer.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "john@gmail.com");
    assert!(sent[0].text.contains(RESET_URL));

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.reset_password_token.map(|t| t.len()), Some(64));
    assert!(stored.reset_password_expire.is_some());

    Ok(())
}

/// Tests requesting a password reset for an unknown email.
///
/// Expected: Err(AppError::NotFound) and no email sent
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let mailer = MemoryMailer::default();

    let result = AuthService::new(db, &jwt, 4)
        .forgot_password(&mailer, "nobody@gmail.com", RESET_URL)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(mailer.sent.lock().unwrap().is_empty());

    Ok(())
}

/// Tests that a failed delivery clears the stored token.
///
/// Expected: Err(AppError::EmailErr) and no token left on the user
#[tokio::test]
async fn clears_token_when_email_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = UserFactory::new(db).email("john@gmail.com").build().await?;

    let result = AuthService::new(db, &jwt, 4)
        .forgot_password(&FailingMailer, "john@gmail.com", RESET_URL)
        .await;

    assert!(matches!(result, Err(AppError::EmailErr(_))));

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(stored.reset_password_token.is_none());
    assert!(stored.reset_password_expire.is_none());

    Ok(())
}
