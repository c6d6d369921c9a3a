use super::*;

/// Tests that deleting a bootcamp removes its courses and reviews.
///
/// Expected: Ok(true) and no remaining child rows
#[tokio::test]
async fn deletes_bootcamp_with_children() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, bootcamp) = create_bootcamp_with_publisher(db).await?;
    let reviewer = factory::create_user(db).await?;

    factory::create_course(db, bootcamp.id, publisher.id).await?;
    factory::create_course(db, bootcamp.id, publisher.id).await?;
    factory::create_review(db, bootcamp.id, reviewer.id).await?;

    let deleted = BootcampRepository::new(db).delete(bootcamp.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Course::find().all(db).await?.is_empty());
    assert!(entity::prelude::Review::find().all(db).await?.is_empty());
    assert!(entity::prelude::Bootcamp::find_by_id(bootcamp.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a bootcamp that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!BootcampRepository::new(db).delete(42).await?);

    Ok(())
}
