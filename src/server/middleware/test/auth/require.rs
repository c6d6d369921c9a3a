use super::*;

/// Tests an authenticated user on a route open to any role.
///
/// Expected: Ok(User) for the user named by the token
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;

    let token = AuthToken(Some(jwt.create_token(user.id)?));
    let result = AuthGuard::new(db, &jwt, &token).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.role, Role::User);

    Ok(())
}

/// Tests a publisher on a route for publishers and admins.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let publisher = factory::user::UserFactory::new(db)
        .role("publisher")
        .build()
        .await?;

    let token = AuthToken(Some(jwt.create_token(publisher.id)?));
    let result = AuthGuard::new(db, &jwt, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await?;

    assert_eq!(result.role, Role::Publisher);

    Ok(())
}

/// Tests a regular user on a route for publishers and admins.
///
/// Expected: Err(AuthError::RoleNotAuthorized) naming the user's role
#[tokio::test]
async fn denies_access_to_other_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;

    let token = AuthToken(Some(jwt.create_token(user.id)?));
    let result = AuthGuard::new(db, &jwt, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(err @ AuthError::RoleNotAuthorized(Role::User))) => assert_eq!(
            err.to_string(),
            "User role user is not authorized to access this route"
        ),
        other => panic!("Expected RoleNotAuthorized error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a request without a token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_access_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let result = AuthGuard::new(db, &jwt, &AuthToken(None)).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_access_with_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let forged = JwtService::new("other_secret", 30).create_token(user.id)?;
    let result = AuthGuard::new(db, &jwt(), &AuthToken(Some(forged)))
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for a user who has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_to_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let token = AuthToken(Some(jwt.create_token(4242)?));
    let result = AuthGuard::new(db, &jwt, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}
