use super::*;

/// Tests that single course lookups include the bootcamp summary.
///
/// Expected: Ok(Some) with bootcamp name and description
#[tokio::test]
async fn includes_bootcamp_summary() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let course = factory::create_course(db, bootcamp.id, publisher.id).await?;

    let found = CourseRepository::new(db).find_by_id(course.id).await?.unwrap();
    let summary = found.bootcamp.unwrap();

    assert_eq!(summary.id, bootcamp.id);
    assert_eq!(summary.name, bootcamp.name);

    Ok(())
}

/// Tests looking up a course that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(CourseRepository::new(db).find_by_id(1).await?.is_none());

    Ok(())
}
