use super::*;

/// Tests an admin deleting another publisher's bootcamp.
///
/// Expected: Ok, bootcamp and its courses removed
#[tokio::test]
async fn admin_deletes_bootcamp_with_courses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new();
    let admin = actor(UserFactory::new(db).role("admin").build().await?)?;
    let (publisher, bootcamp) = factory::helpers::create_bootcamp_with_publisher(db).await?;
    factory::create_course(db, bootcamp.id, publisher.id).await?;

    BootcampService::new(db, &geocoder)
        .delete(&admin, bootcamp.id)
        .await?;

    assert!(BootcampRepository::new(db)
        .find_by_id(bootcamp.id)
        .await?
        .is_none());
    assert!(CourseRepository::new(db)
        .find_by_bootcamp(bootcamp.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests a regular user deleting someone else's bootcamp.
///
/// Expected: Err(AuthError::NotOwner) and the bootcamp kept
#[tokio::test]
async fn rejects_delete_by_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new();
    let user = actor(factory::create_user(db).await?)?;
    let (_, bootcamp) = factory::helpers::create_bootcamp_with_publisher(db).await?;

    let result = BootcampService::new(db, &geocoder)
        .delete(&user, bootcamp.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotOwner { .. }))
    ));
    assert!(BootcampRepository::new(db)
        .find_by_id(bootcamp.id)
        .await?
        .is_some());

    Ok(())
}
