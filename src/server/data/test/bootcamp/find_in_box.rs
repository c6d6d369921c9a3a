use super::*;

/// Tests the bounding-box prefilter of radius searches.
///
/// Boston and Providence lie within 50 miles of each other, Los Angeles does not, and
/// bootcamps without coordinates never match.
///
/// Expected: Ok with the Boston and Providence bootcamps only
#[tokio::test]
async fn returns_bootcamps_inside_box() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let publisher = factory::create_user(db).await?;

    let boston = BootcampFactory::new(db, publisher.id)
        .location(42.3505, -71.1054)
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
    factory::create_bootcamp(db, publisher.id).await?;

    let radius = radius_radians(50.0, DistanceUnit::Miles)?;
    let bounds = BoundingBox::around(42.3505, -71.1054, radius);

    let found = BootcampRepository::new(db).find_in_box(bounds).await?;
    let ids: Vec<i32> = found.iter().map(|b| b.id).collect();

    assert_eq!(ids, vec![boston.id, providence.id]);

    Ok(())
}
