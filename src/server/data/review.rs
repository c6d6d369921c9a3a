//! Review data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::{
    data::query::{fetch_page, FieldKind, QueryField},
    error::AppError,
    model::{
        query::{AdvancedQuery, AdvancedResults},
        review::{CreateReviewParam, Review, UpdateReviewParam},
    },
};

use entity::review::Column;

/// Fields of reviews that list queries may filter and sort on.
pub const REVIEW_QUERY_FIELDS: &[QueryField<Column>] = &[
    QueryField::new("id", Column::Id, FieldKind::Integer),
    QueryField::new("title", Column::Title, FieldKind::Text),
    QueryField::new("rating", Column::Rating, FieldKind::Integer),
    QueryField::new("bootcamp", Column::BootcampId, FieldKind::Integer),
    QueryField::new("user", Column::UserId, FieldKind::Integer),
    QueryField::new("createdAt", Column::CreatedAt, FieldKind::DateTime),
];

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review of a bootcamp.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::DbErr)` - Database error, including a unique violation when the
    ///   user already reviewed the bootcamp
    pub async fn create(
        &self,
        bootcamp_id: i32,
        user_id: i32,
        param: CreateReviewParam,
    ) -> Result<Review, AppError> {
        let entity = entity::review::ActiveModel {
            title: ActiveValue::Set(param.title),
            text: ActiveValue::Set(param.text),
            rating: ActiveValue::Set(param.rating),
            bootcamp_id: ActiveValue::Set(bootcamp_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity, None))
    }

    /// Finds a review by ID along with the name and description of its bootcamp.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, AppError> {
        Ok(entity::prelude::Review::find_by_id(id)
            .find_also_related(entity::prelude::Bootcamp)
            .one(self.db)
            .await?
            .map(|(review, bootcamp)| Review::from_entity(review, bootcamp)))
    }

    pub async fn find_by_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(entity::prelude::Review::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| Review::from_entity(r, None))
            .collect())
    }

    /// Finds the review a user wrote for a bootcamp, if any.
    pub async fn find_by_user_and_bootcamp(
        &self,
        user_id: i32,
        bootcamp_id: i32,
    ) -> Result<Option<Review>, AppError> {
        Ok(entity::prelude::Review::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::BootcampId.eq(bootcamp_id))
            .one(self.db)
            .await?
            .map(|r| Review::from_entity(r, None)))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateReviewParam,
    ) -> Result<Option<Review>, AppError> {
        let Some(existing) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::review::ActiveModel = existing.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(text) = param.text {
            active.text = ActiveValue::Set(text);
        }
        if let Some(rating) = param.rating {
            active.rating = ActiveValue::Set(rating);
        }

        let entity = active.update(self.db).await?;
        Ok(Some(Review::from_entity(entity, None)))
    }

    /// Distinct bootcamps the user has written reviews for.
    pub async fn bootcamp_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(entity::prelude::Review::find()
            .select_only()
            .column(Column::BootcampId)
            .distinct()
            .filter(Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Review::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Rating of every review of a bootcamp, input to its average rating.
    pub async fn ratings_for_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(entity::prelude::Review::find()
            .select_only()
            .column(Column::Rating)
            .filter(Column::BootcampId.eq(bootcamp_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?)
    }

    /// Lists reviews with filtering, sorting and pagination, each with its bootcamp's
    /// name and description.
    pub async fn get_advanced(
        &self,
        query: &AdvancedQuery,
    ) -> Result<AdvancedResults<Review>, AppError> {
        let (models, total) = fetch_page(
            self.db,
            entity::prelude::Review::find(),
            REVIEW_QUERY_FIELDS,
            query,
            Column::Id,
        )
        .await?;

        let bootcamp_ids: Vec<i32> = models.iter().map(|r| r.bootcamp_id).collect();
        let bootcamps: HashMap<i32, entity::bootcamp::Model> = if !bootcamp_ids.is_empty() {
            entity::prelude::Bootcamp::find()
                .filter(entity::bootcamp::Column::Id.is_in(bootcamp_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|b| (b.id, b))
                .collect()
        } else {
            HashMap::new()
        };

        let items = models
            .into_iter()
            .map(|r| {
                let bootcamp = bootcamps.get(&r.bootcamp_id).cloned();
                Review::from_entity(r, bootcamp)
            })
            .collect();

        Ok(AdvancedResults {
            items,
            total,
            pagination: query.pagination(total),
        })
    }

    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = entity::prelude::Review::delete_many().exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
