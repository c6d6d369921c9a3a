use super::*;

fn create_param(name: &str) -> CreateBootcampParam {
    CreateBootcampParam {
        name: name.to_string(),
        slug: "devworks-bootcamp".to_string(),
        description: "Full stack web development".to_string(),
        website: None,
        phone: None,
        email: None,
        address: "233 Bay State Rd Boston MA 02215".to_string(),
        careers: vec!["Web Development".to_string(), "Business".to_string()],
        housing: true,
        job_assistance: false,
        job_guarantee: false,
        accept_gi: true,
    }
}

/// Tests creating a bootcamp with a geocoded location.
///
/// Verifies careers round-trip through the JSON column, the default photo is set and
/// the derived averages start empty.
///
/// Expected: Ok with bootcamp created
#[tokio::test]
async fn creates_bootcamp_with_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let publisher = factory::create_user(db).await?;

    let location = GeoLocation {
        latitude: 42.35,
        longitude: -71.10,
        formatted_address: Some("233 Bay State Rd, Boston, MA 02215, US".to_string()),
        street: Some("233 Bay State Rd".to_string()),
        city: Some("Boston".to_string()),
        state: Some("MA".to_string()),
        zipcode: Some("02215".to_string()),
        country: Some("US".to_string()),
    };

    let bootcamp = BootcampRepository::new(db)
        .create(publisher.id, create_param("Devworks Bootcamp"), Some(location.clone()))
        .await?;

    assert_eq!(bootcamp.user_id, publisher.id);
    assert_eq!(bootcamp.careers, vec!["Web Development", "Business"]);
    assert_eq!(bootcamp.photo, "no-photo.jpg");
    assert_eq!(bootcamp.average_cost, None);
    assert_eq!(bootcamp.location, Some(location));

    Ok(())
}

/// Tests that bootcamp names are unique.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let publisher = factory::create_user(db).await?;

    let repo = BootcampRepository::new(db);
    repo.create(publisher.id, create_param("Devworks Bootcamp"), None)
        .await?;
    let result = repo
        .create(publisher.id, create_param("Devworks Bootcamp"), None)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
