use super::*;

/// Tests collecting the ratings of a bootcamp's reviews.
///
/// Expected: Ok with every rating of that bootcamp
#[tokio::test]
async fn returns_ratings_of_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, bootcamp) = create_bootcamp_with_publisher(db).await?;

    for rating in [4, 9] {
        let user = factory::create_user(db).await?;
        ReviewFactory::new(db, bootcamp.id, user.id)
            .rating(rating)
            .build()
            .await?;
    }

    let mut ratings = ReviewRepository::new(db)
        .ratings_for_bootcamp(bootcamp.id)
        .await?;
    ratings.sort();

    assert_eq!(ratings, vec![4, 9]);

    Ok(())
}
