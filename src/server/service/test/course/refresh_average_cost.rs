use super::*;

/// Tests the average cost following course updates and deletes.
///
/// Expected: average rounded up to tens after each change, `None` once no course remains
#[tokio::test]
async fn tracks_course_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let first = CourseFactory::new(db, bootcamp.id, publisher.id)
        .tuition(8000)
        .build()
        .await?;
    let second = CourseFactory::new(db, bootcamp.id, publisher.id)
        .tuition(10000)
        .build()
        .await?;
    let publisher = actor(publisher)?;
    let service = CourseService::new(db);
    let repo = BootcampRepository::new(db);

    assert_eq!(service.refresh_average_cost(bootcamp.id).await?, Some(9000));

    service
        .update(
            &publisher,
            first.id,
            UpdateCourseParam {
                tuition: Some(8005),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(
        repo.find_by_id(bootcamp.id).await?.unwrap().average_cost,
        Some(9010)
    );

    service.delete(&publisher, first.id).await?;
    assert_eq!(
        repo.find_by_id(bootcamp.id).await?.unwrap().average_cost,
        Some(10000)
    );

    service.delete(&publisher, second.id).await?;
    assert_eq!(repo.find_by_id(bootcamp.id).await?.unwrap().average_cost, None);

    Ok(())
}
