//! Bootcamp factory for creating test bootcamp entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bootcamps with customizable fields.
///
/// Bootcamps are created without a location unless [`BootcampFactory::location`] is
/// called, so geocoding is never needed in tests.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bootcamp::BootcampFactory;
///
/// let bootcamp = BootcampFactory::new(&db, publisher.id)
///     .name("Devworks Bootcamp")
///     .careers(&["Web Development", "UI/UX"])
///     .location(42.35, -71.10)
///     .build()
///     .await?;
/// ```
pub struct BootcampFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    description: String,
    address: String,
    careers: Vec<String>,
    location: Option<(f64, f64)>,
    average_cost: Option<i32>,
    average_rating: Option<f64>,
    housing: bool,
    created_at: DateTime<Utc>,
}

impl<'a> BootcampFactory<'a> {
    /// Creates a new BootcampFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Bootcamp {id}"` where id is auto-incremented
    /// - careers: `["Web Development"]`
    /// - no location, averages or housing
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Bootcamp {}", id),
            description: "Test bootcamp description".to_string(),
            address: "233 Bay State Rd Boston MA 02215".to_string(),
            careers: vec!["Web Development".to_string()],
            location: None,
            average_cost: None,
            average_rating: None,
            housing: false,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn careers(mut self, careers: &[&str]) -> Self {
        self.careers = careers.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Sets the coordinates of the bootcamp.
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some((latitude, longitude));
        self
    }

    pub fn average_cost(mut self, average_cost: i32) -> Self {
        self.average_cost = Some(average_cost);
        self
    }

    pub fn average_rating(mut self, average_rating: f64) -> Self {
        self.average_rating = Some(average_rating);
        self
    }

    pub fn housing(mut self, housing: bool) -> Self {
        self.housing = housing;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the bootcamp entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created bootcamp entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bootcamp::Model, DbErr> {
        let careers =
            serde_json::to_string(&self.careers).map_err(|e| DbErr::Custom(e.to_string()))?;
        let slug = self.name.to_lowercase().replace(' ', "-");

        entity::bootcamp::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(self.description),
            website: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            address: ActiveValue::Set(self.address),
            latitude: ActiveValue::Set(self.location.map(|(lat, _)| lat)),
            longitude: ActiveValue::Set(self.location.map(|(_, lng)| lng)),
            formatted_address: ActiveValue::Set(None),
            street: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            zipcode: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            careers: ActiveValue::Set(careers),
            average_rating: ActiveValue::Set(self.average_rating),
            average_cost: ActiveValue::Set(self.average_cost),
            photo: ActiveValue::Set("no-photo.jpg".to_string()),
            housing: ActiveValue::Set(self.housing),
            job_assistance: ActiveValue::Set(false),
            job_guarantee: ActiveValue::Set(false),
            accept_gi: ActiveValue::Set(false),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bootcamp with default values owned by `user_id`.
pub async fn create_bootcamp(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::bootcamp::Model, DbErr> {
    BootcampFactory::new(db, user_id).build().await
}
