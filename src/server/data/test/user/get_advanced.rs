use super::*;

/// Tests filtering users by role.
///
/// Expected: Ok with only publishers, total counting filtered rows
#[tokio::test]
async fn filters_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::user::UserFactory::new(db).role("publisher").build().await?;
    factory::user::UserFactory::new(db).role("publisher").build().await?;

    let results = UserRepository::new(db)
        .get_advanced(&advanced_query(&[("role", "publisher")]))
        .await?;

    assert_eq!(results.total, 2);
    assert!(results.items.iter().all(|u| u.role == Role::Publisher));

    Ok(())
}

/// Tests that only whitelisted fields can be filtered.
///
/// Expected: Err(BadRequest) for the password column
#[tokio::test]
async fn rejects_unknown_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .get_advanced(&advanced_query(&[("password", "x")]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
