use super::*;

/// Tests publishing a bootcamp with a resolvable address.
///
/// Expected: Ok with the geocoded coordinates stored and the publisher as owner
#[tokio::test]
async fn creates_geocoded_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new().with(BOSTON_ADDRESS, 42.3505, -71.1054);
    let publisher = actor(UserFactory::new(db).role("publisher").build().await?)?;

    let bootcamp = BootcampService::new(db, &geocoder)
        .create(&publisher, create_param("Devworks Bootcamp"))
        .await?;

    let location = bootcamp.location.unwrap();
    assert_eq!(bootcamp.user_id, publisher.id);
    assert_eq!(bootcamp.slug, "devworks-bootcamp");
    assert_eq!((location.latitude, location.longitude), (42.3505, -71.1054));

    Ok(())
}

/// Tests that a publisher cannot publish a second bootcamp.
///
/// Expected: Err(AppError::BadRequest) naming the publisher
#[tokio::test]
async fn rejects_second_bootcamp_of_publisher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new();
    let publisher = actor(UserFactory::new(db).role("publisher").build().await?)?;
    factory::create_bootcamp(db, publisher.id).await?;

    let result = BootcampService::new(db, &geocoder)
        .create(&publisher, create_param("Second Bootcamp"))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(
            msg,
            format!("The user with ID {} has already published a bootcamp", publisher.id)
        ),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests that admins may publish any number of bootcamps.
///
/// Expected: Ok, second bootcamp created without location for an unknown address
#[tokio::test]
async fn admin_publishes_multiple_bootcamps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new();
    let admin = actor(UserFactory::new(db).role("admin").build().await?)?;
    factory::create_bootcamp(db, admin.id).await?;

    let bootcamp = BootcampService::new(db, &geocoder)
        .create(&admin, create_param("Admin Bootcamp"))
        .await?;

    assert!(bootcamp.location.is_none());
    assert_eq!(
        BootcampRepository::new(db).count_by_user(admin.id).await?,
        2
    );

    Ok(())
}
