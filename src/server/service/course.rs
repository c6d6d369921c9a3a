//! Course business rules and the derived bootcamp average cost.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bootcamp::BootcampRepository, course::CourseRepository},
    error::AppError,
    model::{
        course::{Course, CreateCourseParam, UpdateCourseParam},
        query::{AdvancedQuery, AdvancedResults},
        user::User,
    },
    service::bootcamp::bootcamp_not_found,
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists courses of all bootcamps, each with its bootcamp's name and description.
    pub async fn get_all(&self, query: &AdvancedQuery) -> Result<AdvancedResults<Course>, AppError> {
        CourseRepository::new(self.db).get_advanced(query).await
    }

    pub async fn get_by_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<Course>, AppError> {
        CourseRepository::new(self.db).find_by_bootcamp(bootcamp_id).await
    }

    /// Gets a course with its bootcamp's name and description.
    ///
    /// # Returns
    /// - `Ok(Course)` - The course
    /// - `Err(AppError::BadRequest)` - No course with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| course_not_found(id))
    }

    /// Adds a course to a bootcamp owned by `actor`.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(AppError::BadRequest)` - No bootcamp with that ID
    /// - `Err(AuthError::NotOwner)` - Actor is neither the bootcamp owner nor admin
    pub async fn create(
        &self,
        actor: &User,
        bootcamp_id: i32,
        param: CreateCourseParam,
    ) -> Result<Course, AppError> {
        let bootcamp = BootcampRepository::new(self.db)
            .find_by_id(bootcamp_id)
            .await?
            .ok_or_else(|| bootcamp_not_found(bootcamp_id))?;
        actor.ensure_owner(
            bootcamp.user_id,
            &format!("add a course to bootcamp {}", bootcamp_id),
        )?;

        let course = CourseRepository::new(self.db)
            .create(bootcamp_id, actor.id, param)
            .await?;
        self.refresh_average_cost(bootcamp_id).await?;

        Ok(course)
    }

    /// Updates a course created by `actor`.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        param: UpdateCourseParam,
    ) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);

        let existing = self.get_by_id(id).await?;
        actor.ensure_owner(existing.user_id, &format!("update course {}", id))?;

        let course = repo
            .update(id, param)
            .await?
            .ok_or_else(|| course_not_found(id))?;
        self.refresh_average_cost(course.bootcamp_id).await?;

        Ok(course)
    }

    /// Deletes a course created by `actor`.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;
        actor.ensure_owner(existing.user_id, &format!("delete course {}", id))?;

        CourseRepository::new(self.db).delete(id).await?;
        self.refresh_average_cost(existing.bootcamp_id).await?;

        Ok(())
    }

    /// Recomputes the average tuition of a bootcamp from its current courses.
    pub async fn refresh_average_cost(&self, bootcamp_id: i32) -> Result<Option<i32>, AppError> {
        let tuitions = CourseRepository::new(self.db)
            .tuitions_for_bootcamp(bootcamp_id)
            .await?;
        let average = average_cost(&tuitions);

        BootcampRepository::new(self.db)
            .set_average_cost(bootcamp_id, average)
            .await?;

        tracing::debug!("Bootcamp {} average cost is now {:?}", bootcamp_id, average);
        Ok(average)
    }
}

/// Mean tuition rounded up to the next multiple of 10, `None` without courses.
pub fn average_cost(tuitions: &[i32]) -> Option<i32> {
    if tuitions.is_empty() {
        return None;
    }

    let sum: i64 = tuitions.iter().map(|&t| i64::from(t)).sum();
    let mean = sum as f64 / tuitions.len() as f64;

    Some(((mean / 10.0).ceil() * 10.0) as i32)
}

fn course_not_found(id: i32) -> AppError {
    AppError::BadRequest(format!("No course with the id of {} is available", id))
}
