use super::*;

/// Tests storing and clearing the derived averages.
///
/// Expected: Ok with values readable through `find_by_id`
#[tokio::test]
async fn stores_and_clears_averages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, bootcamp) = create_bootcamp_with_publisher(db).await?;

    let repo = BootcampRepository::new(db);
    repo.set_average_cost(bootcamp.id, Some(11000)).await?;
    repo.set_average_rating(bootcamp.id, Some(7.5)).await?;

    let found = repo.find_by_id(bootcamp.id).await?.unwrap();
    assert_eq!(found.average_cost, Some(11000));
    assert_eq!(found.average_rating, Some(7.5));

    repo.set_average_cost(bootcamp.id, None).await?;
    let found = repo.find_by_id(bootcamp.id).await?.unwrap();
    assert_eq!(found.average_cost, None);
    assert_eq!(found.average_rating, Some(7.5));

    Ok(())
}

/// Tests counting the bootcamps a publisher owns.
///
/// Expected: Ok(1) for the owner, Ok(0) for anyone else
#[tokio::test]
async fn counts_bootcamps_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (publisher, _) = create_bootcamp_with_publisher(db).await?;
    let other = factory::create_user(db).await?;

    let repo = BootcampRepository::new(db);
    assert_eq!(repo.count_by_user(publisher.id).await?, 1);
    assert_eq!(repo.count_by_user(other.id).await?, 0);

    Ok(())
}
