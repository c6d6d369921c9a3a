//! Review domain models and parameters.
//!
//! A user may review each bootcamp once. Ratings range from 1 to 10.

use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    server::{error::AppError, model::bootcamp::BootcampSummary, util::validate},
};

const TITLE_MAX: usize = 100;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub bootcamp_id: i32,
    pub bootcamp: Option<BootcampSummary>,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            title: self.title,
            text: self.text,
            rating: self.rating,
            bootcamp: self.bootcamp_id,
            bootcamp_details: self.bootcamp.map(BootcampSummary::into_dto),
            user: self.user_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(
        entity: entity::review::Model,
        bootcamp: Option<entity::bootcamp::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            text: entity.text,
            rating: entity.rating,
            bootcamp_id: entity.bootcamp_id,
            bootcamp: bootcamp.map(|b| BootcampSummary {
                id: b.id,
                name: b.name,
                description: b.description,
            }),
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewParam {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

impl CreateReviewParam {
    pub fn from_dto(dto: CreateReviewDto) -> Result<Self, AppError> {
        Ok(Self {
            title: validate_title(&dto.title)?,
            text: validate::required("text", &dto.text)?,
            rating: validate_rating(dto.rating)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReviewParam {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl UpdateReviewParam {
    pub fn from_dto(dto: UpdateReviewDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title.as_deref().map(validate_title).transpose()?,
            text: dto
                .text
                .as_deref()
                .map(|t| validate::required("text", t))
                .transpose()?,
            rating: dto.rating.map(validate_rating).transpose()?,
        })
    }
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let title = validate::required("title for the review", title)?;
    validate::max_len("title", &title, TITLE_MAX)?;
    Ok(title)
}

fn validate_rating(rating: i32) -> Result<i32, AppError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Please add a rating between {} and {}",
            RATING_MIN, RATING_MAX
        )));
    }
    Ok(rating)
}
