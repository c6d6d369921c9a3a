use super::*;

/// Tests creating and then updating a course.
///
/// Expected: Ok with stored values, minimum skill round-tripped through text
#[tokio::test]
async fn creates_and_updates_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;

    let repo = CourseRepository::new(db);
    let course = repo
        .create(
            bootcamp.id,
            publisher.id,
            CreateCourseParam {
                title: "Front End Web Development".to_string(),
                description: "HTML, CSS and JavaScript".to_string(),
                weeks: 8,
                tuition: 8000,
                minimum_skill: MinimumSkill::Intermediate,
                scholarship_available: true,
            },
        )
        .await?;

    assert_eq!(course.bootcamp_id, bootcamp.id);
    assert_eq!(course.minimum_skill, MinimumSkill::Intermediate);

    let updated = repo
        .update(
            course.id,
            UpdateCourseParam {
                tuition: Some(9000),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.tuition, 9000);
    assert_eq!(updated.title, "Front End Web Development");

    Ok(())
}
