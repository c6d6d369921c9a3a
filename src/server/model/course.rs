//! Course domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::course::{CourseDto, CreateCourseDto, MinimumSkill, UpdateCourseDto},
    server::{error::AppError, model::bootcamp::BootcampSummary, util::validate},
};

const TITLE_MAX: usize = 50;
const DESCRIPTION_MAX: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i32,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    pub bootcamp_id: i32,
    /// Name and description of the bootcamp, loaded only by lookups that join it.
    pub bootcamp: Option<BootcampSummary>,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            weeks: self.weeks,
            tuition: self.tuition,
            minimum_skill: self.minimum_skill,
            scholarship_available: self.scholarship_available,
            bootcamp: self.bootcamp_id,
            bootcamp_details: self.bootcamp.map(BootcampSummary::into_dto),
            user: self.user_id,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a course domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The course entity
    /// - `bootcamp` - Optional related bootcamp entity, when the query joined it
    ///
    /// # Returns
    /// - `Ok(Course)` - The converted course
    /// - `Err(AppError::InternalError)` - Stored minimum skill is not a known level
    pub fn from_entity(
        entity: entity::course::Model,
        bootcamp: Option<entity::bootcamp::Model>,
    ) -> Result<Self, AppError> {
        let minimum_skill = entity.minimum_skill.parse::<MinimumSkill>().map_err(|e| {
            AppError::InternalError(format!("Course {} has invalid minimum skill: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            weeks: entity.weeks,
            tuition: entity.tuition,
            minimum_skill,
            scholarship_available: entity.scholarship_available,
            bootcamp_id: entity.bootcamp_id,
            bootcamp: bootcamp.map(|b| BootcampSummary {
                id: b.id,
                name: b.name,
                description: b.description,
            }),
            user_id: entity.user_id,
            created_at: entity.created_at,
        })
    }
}

/// Validated input for adding a course to a bootcamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCourseParam {
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i32,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
}

impl CreateCourseParam {
    pub fn from_dto(dto: CreateCourseDto) -> Result<Self, AppError> {
        Ok(Self {
            title: validate_title(&dto.title)?,
            description: validate_description(&dto.description)?,
            weeks: validate_weeks(dto.weeks)?,
            tuition: validate_tuition(dto.tuition)?,
            minimum_skill: dto.minimum_skill,
            scholarship_available: dto.scholarship_available,
        })
    }
}

/// Partial course update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCourseParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<i32>,
    pub tuition: Option<i32>,
    pub minimum_skill: Option<MinimumSkill>,
    pub scholarship_available: Option<bool>,
}

impl UpdateCourseParam {
    pub fn from_dto(dto: UpdateCourseDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title.as_deref().map(validate_title).transpose()?,
            description: dto.description.as_deref().map(validate_description).transpose()?,
            weeks: dto.weeks.map(validate_weeks).transpose()?,
            tuition: dto.tuition.map(validate_tuition).transpose()?,
            minimum_skill: dto.minimum_skill,
            scholarship_available: dto.scholarship_available,
        })
    }
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let title = validate::required("course title", title)?;
    validate::max_len("title", &title, TITLE_MAX)?;
    Ok(title)
}

fn validate_description(description: &str) -> Result<String, AppError> {
    let description = validate::required("description", description)?;
    validate::max_len("description", &description, DESCRIPTION_MAX)?;
    Ok(description)
}

fn validate_weeks(weeks: i32) -> Result<i32, AppError> {
    if weeks <= 0 {
        return Err(AppError::BadRequest("Please add number of weeks".to_string()));
    }
    Ok(weeks)
}

fn validate_tuition(tuition: i32) -> Result<i32, AppError> {
    if tuition < 0 {
        return Err(AppError::BadRequest("Please add a tuition cost".to_string()));
    }
    Ok(tuition)
}
