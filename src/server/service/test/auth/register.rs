use super::*;

/// Tests registering a new account.
///
/// Expected: Ok with a hashed password and a token naming the new user
#[tokio::test]
async fn registers_user_and_signs_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let (user, token) = AuthService::new(db, &jwt, 4)
        .register(CreateUserParam {
            name: "John Doe".to_string(),
            email: "john@gmail.com".to_string(),
            password: "123456".to_string(),
            role: Role::Publisher,
        })
        .await?;

    assert_eq!(user.role, Role::Publisher);
    assert_ne!(user.password_hash, "123456");
    assert_eq!(jwt.verify_token(&token)?.user_id()?, user.id);

    Ok(())
}

/// Tests registering an email that is already taken.
///
/// Expected: Err(AppError::DbErr) with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    UserFactory::new(db).email("john@gmail.com").build().await?;

    let result = AuthService::new(db, &jwt, 4)
        .register(CreateUserParam {
            name: "John Doe".to_string(),
            email: "john@gmail.com".to_string(),
            password: "123456".to_string(),
            role: Role::User,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
