use super::*;

/// Tests the average rating following review updates and deletes.
///
/// Expected: mean of remaining ratings after each change, `None` once no review remains
#[tokio::test]
async fn tracks_review_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let first = ReviewFactory::new(db, bootcamp.id, alice.id)
        .rating(6)
        .build()
        .await?;
    let second = ReviewFactory::new(db, bootcamp.id, bob.id)
        .rating(10)
        .build()
        .await?;
    let alice = actor(alice)?;
    let bob = actor(bob)?;
    let service = ReviewService::new(db);
    let repo = BootcampRepository::new(db);

    assert_eq!(service.refresh_average_rating(bootcamp.id).await?, Some(8.0));

    service
        .update(
            &alice,
            first.id,
            UpdateReviewParam {
                rating: Some(9),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(
        repo.find_by_id(bootcamp.id).await?.unwrap().average_rating,
        Some(9.5)
    );

    service.delete(&bob, second.id).await?;
    assert_eq!(
        repo.find_by_id(bootcamp.id).await?.unwrap().average_rating,
        Some(9.0)
    );

    service.delete(&alice, first.id).await?;
    assert_eq!(repo.find_by_id(bootcamp.id).await?.unwrap().average_rating, None);

    Ok(())
}

/// Tests a user updating someone else's review.
///
/// Expected: Err(AuthError::NotOwner)
#[tokio::test]
async fn rejects_update_by_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let author = factory::create_user(db).await?;
    let other = actor(factory::create_user(db).await?)?;
    let review = factory::create_review(db, bootcamp.id, author.id).await?;

    let result = ReviewService::new(db)
        .update(&other, review.id, UpdateReviewParam::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotOwner { .. }))
    ));

    Ok(())
}
