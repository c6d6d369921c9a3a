//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// Inserting through the factory does not update the bootcamp's average cost; tests
/// exercising that behaviour go through the course service.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    bootcamp_id: i32,
    user_id: i32,
    title: String,
    weeks: i32,
    tuition: i32,
    minimum_skill: String,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Course {id}"` where id is auto-incremented
    /// - weeks: `8`, tuition: `10000`, minimum_skill: `"beginner"`
    pub fn new(db: &'a DatabaseConnection, bootcamp_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            bootcamp_id,
            user_id,
            title: format!("Course {}", id),
            weeks: 8,
            tuition: 10000,
            minimum_skill: "beginner".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn weeks(mut self, weeks: i32) -> Self {
        self.weeks = weeks;
        self
    }

    pub fn tuition(mut self, tuition: i32) -> Self {
        self.tuition = tuition;
        self
    }

    pub fn minimum_skill(mut self, minimum_skill: impl Into<String>) -> Self {
        self.minimum_skill = minimum_skill.into();
        self
    }

    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Test course description".to_string()),
            weeks: ActiveValue::Set(self.weeks),
            tuition: ActiveValue::Set(self.tuition),
            minimum_skill: ActiveValue::Set(self.minimum_skill),
            scholarship_available: ActiveValue::Set(false),
            bootcamp_id: ActiveValue::Set(self.bootcamp_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(
    db: &DatabaseConnection,
    bootcamp_id: i32,
    user_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, bootcamp_id, user_id).build().await
}
