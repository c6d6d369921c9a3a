//! Bootcamp business rules: publishing limits, ownership, geocoding and radius search.

use sea_orm::DatabaseConnection;
use std::path::Path;

use crate::server::{
    data::{bootcamp::BootcampRepository, course::CourseRepository},
    error::AppError,
    model::{
        bootcamp::{Bootcamp, BootcampWithCourses, CreateBootcampParam, UpdateBootcampParam},
        geo::GeoLocation,
        query::{AdvancedQuery, AdvancedResults},
        user::User,
    },
    service::{geocoder::Geocoder, upload::PhotoUpload},
    util::geo::{central_angle, radius_radians, BoundingBox, DistanceUnit},
};

pub struct BootcampService<'a> {
    db: &'a DatabaseConnection,
    geocoder: &'a dyn Geocoder,
}

impl<'a> BootcampService<'a> {
    pub fn new(db: &'a DatabaseConnection, geocoder: &'a dyn Geocoder) -> Self {
        Self { db, geocoder }
    }

    pub async fn get_all(&self, query: &AdvancedQuery) -> Result<AdvancedResults<Bootcamp>, AppError> {
        BootcampRepository::new(self.db).get_advanced(query).await
    }

    /// Gets a bootcamp with its courses.
    ///
    /// # Returns
    /// - `Ok(BootcampWithCourses)` - The bootcamp and its courses, oldest first
    /// - `Err(AppError::BadRequest)` - No bootcamp with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<BootcampWithCourses, AppError> {
        let bootcamp = self.find(id).await?;
        let courses = CourseRepository::new(self.db).find_by_bootcamp(id).await?;

        Ok(BootcampWithCourses { bootcamp, courses })
    }

    /// Publishes a bootcamp owned by `actor`, geocoding its address.
    ///
    /// Publishers may own a single bootcamp, admins any number.
    ///
    /// # Returns
    /// - `Ok(Bootcamp)` - The created bootcamp
    /// - `Err(AppError::BadRequest)` - Publisher already owns a bootcamp
    /// - `Err(AppError::DbErr)` - Name already taken (400 on response) or database error
    pub async fn create(&self, actor: &User, param: CreateBootcampParam) -> Result<Bootcamp, AppError> {
        let repo = BootcampRepository::new(self.db);

        if !actor.is_admin() && repo.count_by_user(actor.id).await? > 0 {
            return Err(AppError::BadRequest(format!(
                "The user with ID {} has already published a bootcamp",
                actor.id
            )));
        }

        let location = self.geocode_address(&param.address).await?;
        let bootcamp = repo.create(actor.id, param, location).await?;

        tracing::info!("User {} published bootcamp {} ({})", actor.id, bootcamp.id, bootcamp.name);
        Ok(bootcamp)
    }

    /// Updates a bootcamp owned by `actor`, re-geocoding when the address changes.
    ///
    /// # Returns
    /// - `Ok(Bootcamp)` - The updated bootcamp
    /// - `Err(AppError::BadRequest)` - No bootcamp with that ID
    /// - `Err(AuthError::NotOwner)` - Actor is neither owner nor admin
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        param: UpdateBootcampParam,
    ) -> Result<Bootcamp, AppError> {
        let existing = self.find(id).await?;
        actor.ensure_owner(existing.user_id, "update this bootcamp")?;

        let location = match param.address.as_deref() {
            Some(address) if address != existing.address => {
                Some(self.geocode_address(address).await?)
            }
            _ => None,
        };

        BootcampRepository::new(self.db)
            .update(id, param, location)
            .await?
            .ok_or_else(|| bootcamp_not_found(id))
    }

    /// Deletes a bootcamp owned by `actor` together with its courses and reviews.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let existing = self.find(id).await?;
        actor.ensure_owner(existing.user_id, "delete this bootcamp")?;

        BootcampRepository::new(self.db).delete(id).await?;

        tracing::info!("User {} deleted bootcamp {}", actor.id, id);
        Ok(())
    }

    /// Finds bootcamps within a distance of a zipcode.
    ///
    /// # Arguments
    /// - `zipcode` - Zipcode or address used as the search centre
    /// - `distance` - Search radius, in `unit`
    /// - `unit` - Unit of `distance`
    ///
    /// # Returns
    /// - `Ok(Vec<Bootcamp>)` - Bootcamps whose great-circle distance is within the radius
    /// - `Err(AppError::BadRequest)` - Non-positive distance or zipcode not found
    pub async fn get_in_radius(
        &self,
        zipcode: &str,
        distance: f64,
        unit: DistanceUnit,
    ) -> Result<Vec<Bootcamp>, AppError> {
        let radius = radius_radians(distance, unit)?;

        let Some(centre) = self.geocoder.geocode(zipcode).await? else {
            return Err(AppError::BadRequest(format!(
                "Could not find a location for zipcode {}",
                zipcode
            )));
        };

        let bounds = BoundingBox::around(centre.latitude, centre.longitude, radius);
        let candidates = BootcampRepository::new(self.db).find_in_box(bounds).await?;

        Ok(candidates
            .into_iter()
            .filter(|bootcamp| {
                bootcamp.location.as_ref().is_some_and(|loc| {
                    central_angle(centre.latitude, centre.longitude, loc.latitude, loc.longitude)
                        <= radius
                })
            })
            .collect())
    }

    /// Stores a new photo for a bootcamp owned by `actor`.
    ///
    /// # Arguments
    /// - `upload` - The photo read from the request
    /// - `upload_dir` - Directory photos are served from
    /// - `max_bytes` - Upper bound on the photo size
    ///
    /// # Returns
    /// - `Ok(Bootcamp)` - The bootcamp with its `photo` set to the stored file name
    /// - `Err(AppError::BadRequest)` - Bootcamp missing, or the upload is not a valid image
    /// - `Err(AuthError::NotOwner)` - Actor is neither owner nor admin
    pub async fn upload_photo(
        &self,
        actor: &User,
        id: i32,
        upload: PhotoUpload,
        upload_dir: &Path,
        max_bytes: u64,
    ) -> Result<Bootcamp, AppError> {
        let existing = self.find(id).await?;
        actor.ensure_owner(existing.user_id, "update this bootcamp")?;

        upload.validate(max_bytes)?;
        let file_name = upload.save(upload_dir, id).await?;

        tracing::debug!("Stored photo {} for bootcamp {}", file_name, id);
        BootcampRepository::new(self.db).set_photo(id, file_name).await
    }

    async fn find(&self, id: i32) -> Result<Bootcamp, AppError> {
        BootcampRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| bootcamp_not_found(id))
    }

    async fn geocode_address(&self, address: &str) -> Result<Option<GeoLocation>, AppError> {
        let location = self.geocoder.geocode(address).await?;
        if location.is_none() {
            tracing::warn!("Geocoder found no match for address '{}'", address);
        }
        Ok(location)
    }
}

pub(crate) fn bootcamp_not_found(id: i32) -> AppError {
    AppError::BadRequest(format!("No bootcamp with the id of {} is available", id))
}
