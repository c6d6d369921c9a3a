use super::*;

/// Tests finding a user by a pending reset token.
///
/// Expected: Ok(Some) for the unexpired token
#[tokio::test]
async fn finds_user_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_reset_token(
        user.id,
        Some(("digest".to_string(), Utc::now() + Duration::minutes(10))),
    )
    .await?;

    let found = repo.find_by_reset_token("digest", Utc::now()).await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that expired tokens are ignored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_reset_token(
        user.id,
        Some(("digest".to_string(), Utc::now() - Duration::minutes(1))),
    )
    .await?;

    assert!(repo.find_by_reset_token("digest", Utc::now()).await?.is_none());

    Ok(())
}

/// Tests that setting a new password clears the pending token.
///
/// Expected: Ok(None) when looking the token up afterwards
#[tokio::test]
async fn set_password_clears_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_reset_token(
        user.id,
        Some(("digest".to_string(), Utc::now() + Duration::minutes(10))),
    )
    .await?;
    let updated = repo.set_password(user.id, "new-hash".to_string()).await?;

    assert_eq!(updated.password_hash, "new-hash");
    assert_eq!(updated.reset_password_expire, None);
    assert!(repo.find_by_reset_token("digest", Utc::now()).await?.is_none());

    Ok(())
}
