use super::*;

/// Tests changing the password with the correct current password.
///
/// Expected: Ok, and login succeeds with the new password only
#[tokio::test]
async fn updates_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = actor(UserFactory::new(db).email("john@gmail.com").build().await?)?;
    let service = AuthService::new(db, &jwt, 4);

    service
        .update_password(&user, "123456".to_string(), "1234567".to_string())
        .await?;

    assert!(service
        .login(Some("john@gmail.com".to_string()), Some("1234567".to_string()))
        .await
        .is_ok());
    assert!(service
        .login(Some("john@gmail.com".to_string()), Some("123456".to_string()))
        .await
        .is_err());

    Ok(())
}

/// Tests changing the password with a wrong current password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = actor(factory::create_user(db).await?)?;

    let result = AuthService::new(db, &jwt, 4)
        .update_password(&user, "wrong-password".to_string(), "1234567".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests updating name and email of the calling user.
///
/// Expected: Ok with the new values, role unchanged
#[tokio::test]
async fn updates_details() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;

    let updated = AuthService::new(db, &jwt, 4)
        .update_details(
            user.id,
            UpdateUserParam {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@gmail.com".to_string()),
                role: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.email, "jane@gmail.com");
    assert_eq!(updated.role, Role::User);

    Ok(())
}
