use super::*;

/// Tests deleting the author of a review on another publisher's bootcamp.
///
/// Expected: Ok with the bootcamp's average rating recomputed from the remaining review
#[tokio::test]
async fn recomputes_average_rating_of_reviewed_bootcamps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let harsh = factory::create_user(db).await?;
    let kind = factory::create_user(db).await?;
    ReviewFactory::new(db, bootcamp.id, harsh.id)
        .rating(2)
        .build()
        .await?;
    ReviewFactory::new(db, bootcamp.id, kind.id)
        .rating(10)
        .build()
        .await?;

    UserService::new(db, BCRYPT_COST).delete(harsh.id).await?;

    let bootcamp = BootcampRepository::new(db)
        .find_by_id(bootcamp.id)
        .await?
        .unwrap();
    assert_eq!(bootcamp.average_rating, Some(10.0));

    Ok(())
}

/// Tests deleting a user who added a course to someone else's bootcamp.
///
/// Expected: Ok with the average cost back to the owner's course alone
#[tokio::test]
async fn recomputes_average_cost_of_bootcamps_with_courses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let admin = UserFactory::new(db).role("admin").build().await?;
    CourseFactory::new(db, bootcamp.id, publisher.id)
        .tuition(10000)
        .build()
        .await?;
    CourseFactory::new(db, bootcamp.id, admin.id)
        .tuition(20000)
        .build()
        .await?;

    UserService::new(db, BCRYPT_COST).delete(admin.id).await?;

    let bootcamp = BootcampRepository::new(db)
        .find_by_id(bootcamp.id)
        .await?
        .unwrap();
    assert_eq!(bootcamp.average_cost, Some(10000));

    Ok(())
}

/// Tests deleting a publisher whose own bootcamp holds their course and review.
///
/// Expected: Ok with the bootcamp removed and nothing left to recompute
#[tokio::test]
async fn removes_own_bootcamp_without_recompute() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;
    factory::create_course(db, bootcamp.id, publisher.id).await?;
    factory::create_review(db, bootcamp.id, publisher.id).await?;

    UserService::new(db, BCRYPT_COST).delete(publisher.id).await?;

    assert!(BootcampRepository::new(db)
        .find_by_id(bootcamp.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db, BCRYPT_COST).delete(999).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
