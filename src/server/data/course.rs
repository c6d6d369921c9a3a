//! Course data repository.

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
        course::{Course, CreateCourseParam, UpdateCourseParam},
        query::{AdvancedQuery, AdvancedResults},
    },
};

use entity::course::Column;

/// Fields of courses that list queries may filter and sort on.
pub const COURSE_QUERY_FIELDS: &[QueryField<Column>] = &[
    QueryField::new("id", Column::Id, FieldKind::Integer),
    QueryField::new("title", Column::Title, FieldKind::Text),
    QueryField::new("weeks", Column::Weeks, FieldKind::Integer),
    QueryField::new("tuition", Column::Tuition, FieldKind::Integer),
    QueryField::new("minimumSkill", Column::MinimumSkill, FieldKind::Text),
    QueryField::new(
        "scholarshipAvailable",
        Column::ScholarshipAvailable,
        FieldKind::Boolean,
    ),
    QueryField::new("bootcamp", Column::BootcampId, FieldKind::Integer),
    QueryField::new("user", Column::UserId, FieldKind::Integer),
    QueryField::new("createdAt", Column::CreatedAt, FieldKind::DateTime),
];

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a course under a bootcamp.
    ///
    /// # Arguments
    /// - `bootcamp_id` - Bootcamp offering the course
    /// - `user_id` - User adding the course
    /// - `param` - Validated course fields
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course, without bootcamp details
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        bootcamp_id: i32,
        user_id: i32,
        param: CreateCourseParam,
    ) -> Result<Course, AppError> {
        let entity = entity::course::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            weeks: ActiveValue::Set(param.weeks),
            tuition: ActiveValue::Set(param.tuition),
            minimum_skill: ActiveValue::Set(param.minimum_skill.as_str().to_string()),
            scholarship_available: ActiveValue::Set(param.scholarship_available),
            bootcamp_id: ActiveValue::Set(bootcamp_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Course::from_entity(entity, None)
    }

    /// Finds a course by ID along with the name and description of its bootcamp.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        entity::prelude::Course::find_by_id(id)
            .find_also_related(entity::prelude::Bootcamp)
            .one(self.db)
            .await?
            .map(|(course, bootcamp)| Course::from_entity(course, bootcamp))
            .transpose()
    }

    /// Gets all courses of a bootcamp, oldest first.
    pub async fn find_by_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<Course>, AppError> {
        entity::prelude::Course::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| Course::from_entity(c, None))
            .collect()
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The updated course, without bootcamp details
    /// - `Ok(None)` - No course with that ID
    pub async fn update(
        &self,
        id: i32,
        param: UpdateCourseParam,
    ) -> Result<Option<Course>, AppError> {
        let Some(existing) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::course::ActiveModel = existing.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(weeks) = param.weeks {
            active.weeks = ActiveValue::Set(weeks);
        }
        if let Some(tuition) = param.tuition {
            active.tuition = ActiveValue::Set(tuition);
        }
        if let Some(minimum_skill) = param.minimum_skill {
            active.minimum_skill = ActiveValue::Set(minimum_skill.as_str().to_string());
        }
        if let Some(scholarship_available) = param.scholarship_available {
            active.scholarship_available = ActiveValue::Set(scholarship_available);
        }

        let entity = active.update(self.db).await?;
        Course::from_entity(entity, None).map(Some)
    }

    /// Distinct bootcamps the user has written courses for.
    pub async fn bootcamp_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(entity::prelude::Course::find()
            .select_only()
            .column(Column::BootcampId)
            .distinct()
            .filter(Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Course::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Tuition of every course offered by a bootcamp, input to its average cost.
    pub async fn tuitions_for_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(entity::prelude::Course::find()
            .select_only()
            .column(Column::Tuition)
            .filter(Column::BootcampId.eq(bootcamp_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?)
    }

    /// Lists courses with filtering, sorting and pagination, each with its bootcamp's
    /// name and description.
    pub async fn get_advanced(
        &self,
        query: &AdvancedQuery,
    ) -> Result<AdvancedResults<Course>, AppError> {
        let (models, total) = fetch_page(
            self.db,
            entity::prelude::Course::find(),
            COURSE_QUERY_FIELDS,
            query,
            Column::Id,
        )
        .await?;

        let bootcamp_ids: Vec<i32> = models.iter().map(|c| c.bootcamp_id).collect();
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
            .map(|c| {
                let bootcamp = bootcamps.get(&c.bootcamp_id).cloned();
                Course::from_entity(c, bootcamp)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AdvancedResults {
            items,
            total,
            pagination: query.pagination(total),
        })
    }

    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = entity::prelude::Course::delete_many().exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
