use super::*;

/// Tests the bootcamp owner adding a course.
///
/// Expected: Ok, and the bootcamp average cost set from the single course
#[tokio::test]
async fn owner_adds_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let publisher = actor(publisher)?;

    let course = CourseService::new(db)
        .create(&publisher, bootcamp.id, course_param(12345))
        .await?;

    let bootcamp = BootcampRepository::new(db)
        .find_by_id(bootcamp.id)
        .await?
        .unwrap();
    assert_eq!(course.user_id, publisher.id);
    assert_eq!(bootcamp.average_cost, Some(12350));

    Ok(())
}

/// Tests a publisher adding a course to a bootcamp they do not own.
///
/// Expected: Err(AuthError::NotOwner)
#[tokio::test]
async fn rejects_course_for_foreign_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let (other, _) = create_bootcamp_with_publisher(db).await?;

    let result = CourseService::new(db)
        .create(&actor(other)?, bootcamp.id, course_param(1000))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotOwner { .. }))
    ));

    Ok(())
}

/// Tests adding a course to a missing bootcamp.
///
/// Expected: Err(AppError::BadRequest) with the missing bootcamp message
#[tokio::test]
async fn rejects_course_for_missing_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = actor(
        factory::user::UserFactory::new(db)
            .role("admin")
            .build()
            .await?,
    )?;

    let result = CourseService::new(db)
        .create(&admin, 999, course_param(1000))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "No bootcamp with the id of 999 is available")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}
