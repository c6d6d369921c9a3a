use super::*;

/// Tests finding the review a user wrote for a specific bootcamp.
///
/// Expected: Ok(Some) for the reviewed bootcamp, Ok(None) for another one
#[tokio::test]
async fn finds_existing_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let other = factory::create_bootcamp(db, publisher.id).await?;
    let user = factory::create_user(db).await?;

    let review = factory::create_review(db, bootcamp.id, user.id).await?;

    let repo = ReviewRepository::new(db);
    let found = repo.find_by_user_and_bootcamp(user.id, bootcamp.id).await?;
    assert_eq!(found.map(|r| r.id), Some(review.id));

    assert!(repo
        .find_by_user_and_bootcamp(user.id, other.id)
        .await?
        .is_none());

    Ok(())
}
