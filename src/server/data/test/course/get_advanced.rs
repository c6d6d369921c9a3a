use super::*;

/// Tests filtering courses and embedding bootcamp summaries in the page.
///
/// Expected: Ok with the beginner course only, bootcamp details attached
#[tokio::test]
async fn filters_by_minimum_skill() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;

    CourseFactory::new(db, bootcamp.id, publisher.id)
        .minimum_skill("beginner")
        .build()
        .await?;
    CourseFactory::new(db, bootcamp.id, publisher.id)
        .minimum_skill("advanced")
        .build()
        .await?;

    let results = CourseRepository::new(db)
        .get_advanced(&advanced_query(&[("minimumSkill", "beginner")]))
        .await?;

    assert_eq!(results.total, 1);
    assert_eq!(results.items[0].minimum_skill, MinimumSkill::Beginner);
    assert_eq!(
        results.items[0].bootcamp.as_ref().map(|b| b.id),
        Some(bootcamp.id)
    );

    Ok(())
}

/// Tests the `in` operator on an integer field.
///
/// Expected: Ok with courses of 6 and 12 weeks
#[tokio::test]
async fn filters_weeks_with_in() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;

    for weeks in [6, 8, 12] {
        CourseFactory::new(db, bootcamp.id, publisher.id)
            .weeks(weeks)
            .build()
            .await?;
    }

    let results = CourseRepository::new(db)
        .get_advanced(&advanced_query(&[("weeks[in]", "6,12"), ("sort", "weeks")]))
        .await?;

    let weeks: Vec<i32> = results.items.iter().map(|c| c.weeks).collect();
    assert_eq!(weeks, vec![6, 12]);

    Ok(())
}
