use super::*;

/// Tests the radius search around a geocoded zipcode.
///
/// Cambridge is about 3 miles from the Boston zipcode centre, Providence about 40 and
/// Los Angeles thousands.
///
/// Expected: Ok with Cambridge for 10 miles, Cambridge and Providence for 50 miles
#[tokio::test]
async fn finds_bootcamps_within_distance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new().with("02118", 42.3364, -71.0725);
    let publisher = factory::create_user(db).await?;

    let cambridge = BootcampFactory::new(db, publisher.id)
        .location(42.3736, -71.1097)
        .build()
        .await?;
    let providence = BootcampFactory::new(db, publisher.id)
        .location(41.8240, -71.4128)
        .build()
        .await?;
    BootcampFactory::new(db, publisher.id)
        .location(34.0522, -118.2437)
        .build()
        .await?;

    let service = BootcampService::new(db, &geocoder);

    let near = service.get_in_radius("02118", 10.0, DistanceUnit::Miles).await?;
    let wide = service.get_in_radius("02118", 50.0, DistanceUnit::Miles).await?;

    assert_eq!(near.iter().map(|b| b.id).collect::<Vec<_>>(), vec![cambridge.id]);
    assert_eq!(
        wide.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![cambridge.id, providence.id]
    );

    Ok(())
}

/// Tests the radius search with a zipcode the geocoder cannot resolve.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_zipcode() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StaticGeocoder::new();

    let result = BootcampService::new(db, &geocoder)
        .get_in_radius("00000", 10.0, DistanceUnit::Kilometers)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
