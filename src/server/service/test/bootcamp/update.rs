use super::*;

/// Tests that changing the address geocodes the new address.
///
/// Expected: Ok with new coordinates and slug following the new name
#[tokio::test]
async fn regeocodes_changed_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new().with("1 Main St Providence RI", 41.8240, -71.4128);
    let publisher = actor(UserFactory::new(db).role("publisher").build().await?)?;
    let bootcamp = factory::create_bootcamp(db, publisher.id).await?;

    let param = UpdateBootcampParam::from_dto(UpdateBootcampDto {
        name: Some("Codemasters".to_string()),
        address: Some("1 Main St Providence RI".to_string()),
        ..Default::default()
    })?;
    let updated = BootcampService::new(db, &geocoder)
        .update(&publisher, bootcamp.id, param)
        .await?;

    assert_eq!(updated.slug, "codemasters");
    assert_eq!(updated.location.map(|l| l.latitude), Some(41.8240));

    Ok(())
}

/// Tests updating a bootcamp owned by someone else.
///
/// Expected: Err(AuthError::NotOwner)
#[tokio::test]
async fn rejects_update_by_other_publisher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new();
    let owner = UserFactory::new(db).role("publisher").build().await?;
    let other = actor(UserFactory::new(db).role("publisher").build().await?)?;
    let bootcamp = factory::create_bootcamp(db, owner.id).await?;

    let result = BootcampService::new(db, &geocoder)
        .update(&other, bootcamp.id, UpdateBootcampParam::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotOwner { .. }))
    ));

    Ok(())
}

/// Tests updating a bootcamp that does not exist.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_missing_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new();
    let admin = actor(UserFactory::new(db).role("admin").build().await?)?;

    let result = BootcampService::new(db, &geocoder)
        .update(&admin, 999, UpdateBootcampParam::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests changing the address to one the geocoder cannot place.
///
/// Expected: Ok with the old coordinates cleared; later updates that keep the address
/// leave the location alone
#[tokio::test]
async fn clears_location_for_unresolved_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new();
    let publisher = actor(UserFactory::new(db).role("publisher").build().await?)?;
    let bootcamp = BootcampFactory::new(db, publisher.id)
        .location(42.3505, -71.1054)
        .build()
        .await?;
    let service = BootcampService::new(db, &geocoder);

    let unchanged = service
        .update(
            &publisher,
            bootcamp.id,
            UpdateBootcampParam::from_dto(UpdateBootcampDto {
                housing: Some(true),
                ..Default::default()
            })?,
        )
        .await?;
    assert_eq!(unchanged.location.map(|l| l.latitude), Some(42.3505));

    let moved = service
        .update(
            &publisher,
            bootcamp.id,
            UpdateBootcampParam::from_dto(UpdateBootcampDto {
                address: Some("Nowhere In Particular".to_string()),
                ..Default::default()
            })?,
        )
        .await?;
    assert_eq!(moved.address, "Nowhere In Particular");
    assert!(moved.location.is_none());

    let stale = BootcampRepository::new(db)
        .find_by_id(bootcamp.id)
        .await?
        .unwrap();
    assert!(stale.location.is_none());

    Ok(())
}
