use super::*;

/// Tests collecting the tuition of a single bootcamp's courses.
///
/// Expected: Ok with tuitions of that bootcamp only
#[tokio::test]
async fn returns_tuitions_of_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let other = factory::create_bootcamp(db, publisher.id).await?;

    CourseFactory::new(db, bootcamp.id, publisher.id)
        .tuition(8000)
        .build()
        .await?;
    CourseFactory::new(db, bootcamp.id, publisher.id)
        .tuition(12000)
        .build()
        .await?;
    CourseFactory::new(db, other.id, publisher.id)
        .tuition(1)
        .build()
        .await?;

    let mut tuitions = CourseRepository::new(db)
        .tuitions_for_bootcamp(bootcamp.id)
        .await?;
    tuitions.sort();

    assert_eq!(tuitions, vec![8000, 12000]);

    Ok(())
}
