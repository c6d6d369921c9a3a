//! Bootcamp data repository.
//!
//! Besides plain CRUD, this repository owns the derived `average_cost` and
//! `average_rating` columns, the cascade removal of a bootcamp's courses and reviews, and
//! the bounding-box prefilter used by radius searches.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::query::{fetch_page, FieldKind, QueryField},
    error::AppError,
    model::{
        bootcamp::{Bootcamp, CreateBootcampParam, UpdateBootcampParam, DEFAULT_PHOTO},
        geo::GeoLocation,
        query::{AdvancedQuery, AdvancedResults},
    },
    util::geo::BoundingBox,
};

use entity::bootcamp::Column;

/// Fields of bootcamps that list queries may filter and sort on.
pub const BOOTCAMP_QUERY_FIELDS: &[QueryField<Column>] = &[
    QueryField::new("id", Column::Id, FieldKind::Integer),
    QueryField::new("name", Column::Name, FieldKind::Text),
    QueryField::new("slug", Column::Slug, FieldKind::Text),
    QueryField::new("city", Column::City, FieldKind::Text),
    QueryField::new("state", Column::State, FieldKind::Text),
    QueryField::new("zipcode", Column::Zipcode, FieldKind::Text),
    QueryField::new("careers", Column::Careers, FieldKind::TextList),
    QueryField::new("averageRating", Column::AverageRating, FieldKind::Float),
    QueryField::new("averageCost", Column::AverageCost, FieldKind::Integer),
    QueryField::new("housing", Column::Housing, FieldKind::Boolean),
    QueryField::new("jobAssistance", Column::JobAssistance, FieldKind::Boolean),
    QueryField::new("jobGuarantee", Column::JobGuarantee, FieldKind::Boolean),
    QueryField::new("acceptGi", Column::AcceptGi, FieldKind::Boolean),
    QueryField::new("user", Column::UserId, FieldKind::Integer),
    QueryField::new("createdAt", Column::CreatedAt, FieldKind::DateTime),
];

fn encode_careers(careers: &[String]) -> Result<String, AppError> {
    Ok(serde_json::to_string(careers)?)
}

fn set_location(active: &mut entity::bootcamp::ActiveModel, location: Option<GeoLocation>) {
    let l = location.as_ref();

    active.latitude = ActiveValue::Set(l.map(|l| l.latitude));
    active.longitude = ActiveValue::Set(l.map(|l| l.longitude));
    active.formatted_address = ActiveValue::Set(l.and_then(|l| l.formatted_address.clone()));
    active.street = ActiveValue::Set(l.and_then(|l| l.street.clone()));
    active.city = ActiveValue::Set(l.and_then(|l| l.city.clone()));
    active.state = ActiveValue::Set(l.and_then(|l| l.state.clone()));
    active.zipcode = ActiveValue::Set(l.and_then(|l| l.zipcode.clone()));
    active.country = ActiveValue::Set(l.and_then(|l| l.country.clone()));
}

pub struct BootcampRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BootcampRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a bootcamp owned by `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning publisher
    /// - `param` - Validated bootcamp fields
    /// - `location` - Geocoded address, if the geocoder resolved it
    ///
    /// # Returns
    /// - `Ok(Bootcamp)` - The created bootcamp with default photo and no averages
    /// - `Err(AppError::DbErr)` - Database error, including a unique violation on name
    pub async fn create(
        &self,
        user_id: i32,
        param: CreateBootcampParam,
        location: Option<GeoLocation>,
    ) -> Result<Bootcamp, AppError> {
        let mut active = entity::bootcamp::ActiveModel {
            name: ActiveValue::Set(param.name),
            slug: ActiveValue::Set(param.slug),
            description: ActiveValue::Set(param.description),
            website: ActiveValue::Set(param.website),
            phone: ActiveValue::Set(param.phone),
            email: ActiveValue::Set(param.email),
            address: ActiveValue::Set(param.address),
            careers: ActiveValue::Set(encode_careers(&param.careers)?),
            average_rating: ActiveValue::Set(None),
            average_cost: ActiveValue::Set(None),
            photo: ActiveValue::Set(DEFAULT_PHOTO.to_string()),
            housing: ActiveValue::Set(param.housing),
            job_assistance: ActiveValue::Set(param.job_assistance),
            job_guarantee: ActiveValue::Set(param.job_guarantee),
            accept_gi: ActiveValue::Set(param.accept_gi),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        set_location(&mut active, location);

        let entity = active.insert(self.db).await?;
        Bootcamp::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bootcamp>, AppError> {
        entity::prelude::Bootcamp::find_by_id(id)
            .one(self.db)
            .await?
            .map(Bootcamp::from_entity)
            .transpose()
    }

    /// Applies a partial update.
    ///
    /// # Arguments
    /// - `id` - Bootcamp ID
    /// - `param` - Fields to change
    /// - `location` - `Some` when the address changed: the new geocoded location, or
    ///   `Some(None)` to clear coordinates the geocoder could not resolve
    ///
    /// # Returns
    /// - `Ok(Some(Bootcamp))` - The updated bootcamp
    /// - `Ok(None)` - No bootcamp with that ID
    pub async fn update(
        &self,
        id: i32,
        param: UpdateBootcampParam,
        location: Option<Option<GeoLocation>>,
    ) -> Result<Option<Bootcamp>, AppError> {
        let Some(existing) = entity::prelude::Bootcamp::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::bootcamp::ActiveModel = existing.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slug) = param.slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(website) = param.website {
            active.website = ActiveValue::Set(Some(website));
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(careers) = param.careers {
            active.careers = ActiveValue::Set(encode_careers(&careers)?);
        }
        if let Some(housing) = param.housing {
            active.housing = ActiveValue::Set(housing);
        }
        if let Some(job_assistance) = param.job_assistance {
            active.job_assistance = ActiveValue::Set(job_assistance);
        }
        if let Some(job_guarantee) = param.job_guarantee {
            active.job_guarantee = ActiveValue::Set(job_guarantee);
        }
        if let Some(accept_gi) = param.accept_gi {
            active.accept_gi = ActiveValue::Set(accept_gi);
        }
        if let Some(location) = location {
            set_location(&mut active, location);
        }

        let entity = active.update(self.db).await?;
        Bootcamp::from_entity(entity).map(Some)
    }

    pub async fn set_photo(&self, id: i32, photo: String) -> Result<Bootcamp, AppError> {
        let entity = entity::bootcamp::ActiveModel {
            id: ActiveValue::Unchanged(id),
            photo: ActiveValue::Set(photo),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Bootcamp::from_entity(entity)
    }

    /// Stores the derived average course tuition, `None` when the bootcamp has no courses.
    pub async fn set_average_cost(&self, id: i32, average_cost: Option<i32>) -> Result<(), AppError> {
        entity::bootcamp::ActiveModel {
            id: ActiveValue::Unchanged(id),
            average_cost: ActiveValue::Set(average_cost),
            ..Default::default()
        }
        .update(self.db)
        .await?;
        Ok(())
    }

    /// Stores the derived average review rating, `None` when the bootcamp has no reviews.
    pub async fn set_average_rating(
        &self,
        id: i32,
        average_rating: Option<f64>,
    ) -> Result<(), AppError> {
        entity::bootcamp::ActiveModel {
            id: ActiveValue::Unchanged(id),
            average_rating: ActiveValue::Set(average_rating),
            ..Default::default()
        }
        .update(self.db)
        .await?;
        Ok(())
    }

    /// Counts the bootcamps owned by a user.
    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(entity::prelude::Bootcamp::find()
            .filter(Column::UserId.eq(user_id))
            .count(self.db)
            .await?)
    }

    /// Deletes a bootcamp together with its courses and reviews in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The bootcamp existed and was deleted
    /// - `Ok(false)` - No bootcamp with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::Course::delete_many()
            .filter(entity::course::Column::BootcampId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::BootcampId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Bootcamp::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists bootcamps with filtering, sorting and pagination.
    pub async fn get_advanced(
        &self,
        query: &AdvancedQuery,
    ) -> Result<AdvancedResults<Bootcamp>, AppError> {
        let (models, total) = fetch_page(
            self.db,
            entity::prelude::Bootcamp::find(),
            BOOTCAMP_QUERY_FIELDS,
            query,
            Column::Id,
        )
        .await?;

        Ok(AdvancedResults {
            items: models
                .into_iter()
                .map(Bootcamp::from_entity)
                .collect::<Result<Vec<_>, _>>()?,
            total,
            pagination: query.pagination(total),
        })
    }

    /// Finds geocoded bootcamps whose coordinates fall inside a bounding box.
    ///
    /// Only a coarse prefilter; callers apply the exact great-circle distance check.
    pub async fn find_in_box(&self, bounds: BoundingBox) -> Result<Vec<Bootcamp>, AppError> {
        entity::prelude::Bootcamp::find()
            .filter(Column::Latitude.between(bounds.min_lat, bounds.max_lat))
            .filter(Column::Longitude.between(bounds.min_lng, bounds.max_lng))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Bootcamp::from_entity)
            .collect()
    }

    /// Deletes every bootcamp, used by the seeder after courses and reviews are gone.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = entity::prelude::Bootcamp::delete_many().exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
