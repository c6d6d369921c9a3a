//! Bootcamp domain models and parameters.
//!
//! A bootcamp is owned by the publisher who created it. Its `average_cost` and
//! `average_rating` are derived from its courses and reviews and are never set directly
//! through the API.

use chrono::{DateTime, Utc};

use crate::{
    model::bootcamp::{BootcampDto, BootcampSummaryDto, CreateBootcampDto, UpdateBootcampDto},
    server::{error::AppError, model::geo::GeoLocation, util::validate},
};

/// Photo file name used until a bootcamp uploads its own.
pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

/// Career tracks a bootcamp may advertise.
pub const CAREERS: [&str; 6] = [
    "Web Development",
    "Mobile Development",
    "UI/UX",
    "Data Science",
    "Business",
    "Other",
];

const NAME_MAX: usize = 50;
const DESCRIPTION_MAX: usize = 500;
const PHONE_MAX: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Bootcamp {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: String,
    /// Geocoded location, absent when the address could not be resolved.
    pub location: Option<GeoLocation>,
    pub careers: Vec<String>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<i32>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    /// ID of the owning publisher.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Bootcamp {
    pub fn into_dto(self) -> BootcampDto {
        BootcampDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            website: self.website,
            phone: self.phone,
            email: self.email,
            address: self.address,
            location: self.location.map(GeoLocation::into_dto),
            careers: self.careers,
            average_rating: self.average_rating,
            average_cost: self.average_cost,
            photo: self.photo,
            housing: self.housing,
            job_assistance: self.job_assistance,
            job_guarantee: self.job_guarantee,
            accept_gi: self.accept_gi,
            user: self.user_id,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a bootcamp domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Bootcamp)` - The converted bootcamp
    /// - `Err(AppError::InternalError)` - Stored careers column is not a JSON string array
    pub fn from_entity(entity: entity::bootcamp::Model) -> Result<Self, AppError> {
        let careers = serde_json::from_str::<Vec<String>>(&entity.careers).map_err(|e| {
            AppError::InternalError(format!(
                "Bootcamp {} has malformed careers column: {}",
                entity.id, e
            ))
        })?;

        let location = match (entity.latitude, entity.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoLocation {
                latitude,
                longitude,
                formatted_address: entity.formatted_address,
                street: entity.street,
                city: entity.city,
                state: entity.state,
                zipcode: entity.zipcode,
                country: entity.country,
            }),
            _ => None,
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            website: entity.website,
            phone: entity.phone,
            email: entity.email,
            address: entity.address,
            location,
            careers,
            average_rating: entity.average_rating,
            average_cost: entity.average_cost,
            photo: entity.photo,
            housing: entity.housing,
            job_assistance: entity.job_assistance,
            job_guarantee: entity.job_guarantee,
            accept_gi: entity.accept_gi,
            user_id: entity.user_id,
            created_at: entity.created_at,
        })
    }

    pub fn summary(&self) -> BootcampSummary {
        BootcampSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Name and description of a bootcamp, embedded in course and review lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct BootcampSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl BootcampSummary {
    pub fn into_dto(self) -> BootcampSummaryDto {
        BootcampSummaryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Bootcamp together with its courses, returned by single bootcamp lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct BootcampWithCourses {
    pub bootcamp: Bootcamp,
    pub courses: Vec<crate::server::model::course::Course>,
}

/// Validated input for creating a bootcamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBootcampParam {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: String,
    pub careers: Vec<String>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
}

impl CreateBootcampParam {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateBootcampParam)` - Validated parameters with the slug derived from the name
    /// - `Err(AppError::BadRequest)` - A field is missing, too long, malformed, or a career
    ///   is not one of [`CAREERS`]
    pub fn from_dto(dto: CreateBootcampDto) -> Result<Self, AppError> {
        let name = validate_name(&dto.name)?;
        let description = validate_description(&dto.description)?;

        Ok(Self {
            slug: validate::slugify(&name),
            name,
            description,
            website: dto.website.as_deref().map(validate::website).transpose()?,
            phone: dto.phone.as_deref().map(validate_phone).transpose()?,
            email: dto.email.as_deref().map(validate::email).transpose()?,
            address: validate::required("address", &dto.address)?,
            careers: validate_careers(dto.careers)?,
            housing: dto.housing,
            job_assistance: dto.job_assistance,
            job_guarantee: dto.job_guarantee,
            accept_gi: dto.accept_gi,
        })
    }
}

/// Partial bootcamp update; `None` leaves the field untouched.
///
/// Changing the name also changes the slug, changing the address triggers geocoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBootcampParam {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub careers: Option<Vec<String>>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

impl UpdateBootcampParam {
    pub fn from_dto(dto: UpdateBootcampDto) -> Result<Self, AppError> {
        let name = dto.name.as_deref().map(validate_name).transpose()?;

        Ok(Self {
            slug: name.as_deref().map(validate::slugify),
            name,
            description: dto.description.as_deref().map(validate_description).transpose()?,
            website: dto.website.as_deref().map(validate::website).transpose()?,
            phone: dto.phone.as_deref().map(validate_phone).transpose()?,
            email: dto.email.as_deref().map(validate::email).transpose()?,
            address: dto
                .address
                .as_deref()
                .map(|a| validate::required("address", a))
                .transpose()?,
            careers: dto.careers.map(validate_careers).transpose()?,
            housing: dto.housing,
            job_assistance: dto.job_assistance,
            job_guarantee: dto.job_guarantee,
            accept_gi: dto.accept_gi,
        })
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = validate::required("name", name)?;
    validate::max_len("name", &name, NAME_MAX)?;
    Ok(name)
}

fn validate_description(description: &str) -> Result<String, AppError> {
    let description = validate::required("description", description)?;
    validate::max_len("description", &description, DESCRIPTION_MAX)?;
    Ok(description)
}

fn validate_phone(phone: &str) -> Result<String, AppError> {
    let phone = phone.trim();
    validate::max_len("phone number", phone, PHONE_MAX)?;
    Ok(phone.to_string())
}

fn validate_careers(careers: Vec<String>) -> Result<Vec<String>, AppError> {
    if careers.is_empty() {
        return Err(AppError::BadRequest("Please add at least one career".to_string()));
    }
    if let Some(unknown) = careers.iter().find(|c| !CAREERS.contains(&c.as_str())) {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid career, expected one of: {}",
            unknown,
            CAREERS.join(", ")
        )));
    }
    Ok(careers)
}
