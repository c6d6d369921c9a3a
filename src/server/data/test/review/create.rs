use super::*;

/// Tests creating, updating and deleting a review.
///
/// Expected: Ok for each step, lookup returns None after deletion
#[tokio::test]
async fn creates_updates_and_deletes_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(
            bootcamp.id,
            user.id,
            CreateReviewParam {
                title: "Learned a ton".to_string(),
                text: "Great instructors".to_string(),
                rating: 8,
            },
        )
        .await?;

    let updated = repo
        .update(
            review.id,
            UpdateReviewParam {
                rating: Some(10),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.rating, 10);
    assert_eq!(updated.title, "Learned a ton");

    let found = repo.find_by_id(review.id).await?.unwrap();
    assert_eq!(found.bootcamp.map(|b| b.id), Some(bootcamp.id));

    assert!(repo.delete(review.id).await?);
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}
