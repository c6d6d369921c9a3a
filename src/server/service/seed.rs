//! Bulk import and removal of sample data.
//!
//! Reads `users.json`, `bootcamps.json`, `courses.json` and `reviews.json` from a
//! directory. Records reference each other through their `_id` strings, which are mapped
//! to the generated database IDs as records are inserted. Missing files are skipped.

use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Deserialize};
use std::{collections::HashMap, path::Path};

use crate::{
    model::{
        bootcamp::CreateBootcampDto,
        course::{CreateCourseDto, MinimumSkill},
        review::CreateReviewDto,
        user::CreateUserDto,
    },
    server::{
        data::{
            bootcamp::BootcampRepository, course::CourseRepository, review::ReviewRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            bootcamp::CreateBootcampParam,
            course::CreateCourseParam,
            review::CreateReviewParam,
            user::{CreateUserParam, NewUser},
        },
        service::{
            auth::password::hash_password, course::CourseService, geocoder::Geocoder,
            review::ReviewService,
        },
    },
};

#[derive(Debug, Deserialize)]
struct SeedUser {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    user: CreateUserDto,
}

#[derive(Debug, Deserialize)]
struct SeedBootcamp {
    #[serde(rename = "_id")]
    id: String,
    user: String,
    #[serde(flatten)]
    bootcamp: CreateBootcampDto,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i32),
    String(String),
}

impl NumberOrString {
    fn into_i32(self, field: &str) -> Result<i32, AppError> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s.trim().parse().map_err(|_| {
                AppError::BadRequest(format!("Invalid number '{}' for {}", s, field))
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedCourse {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    description: String,
    weeks: NumberOrString,
    tuition: NumberOrString,
    minimum_skill: MinimumSkill,
    #[serde(default, alias = "scholarhipsAvailable")]
    scholarship_available: bool,
    bootcamp: String,
    user: String,
}

#[derive(Debug, Deserialize)]
struct SeedReview {
    #[serde(rename = "_id")]
    id: String,
    bootcamp: String,
    user: String,
    #[serde(flatten)]
    review: CreateReviewDto,
}

/// Number of records inserted or removed per table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub bootcamps: u64,
    pub courses: u64,
    pub reviews: u64,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
    geocoder: Option<&'a dyn Geocoder>,
}

impl<'a> SeedService<'a> {
    /// Creates a seeder; bootcamp addresses are geocoded only when a geocoder is given.
    pub fn new(
        db: &'a DatabaseConnection,
        bcrypt_cost: u32,
        geocoder: Option<&'a dyn Geocoder>,
    ) -> Self {
        Self {
            db,
            bcrypt_cost,
            geocoder,
        }
    }

    /// Imports every seed file found in `dir` and recomputes bootcamp averages.
    ///
    /// # Returns
    /// - `Ok(SeedSummary)` - Number of records imported per table
    /// - `Err(AppError::IoErr)` / `Err(AppError::JsonErr)` - Unreadable or malformed file
    /// - `Err(AppError::BadRequest)` - Invalid record or unknown `_id` reference
    pub async fn import(&self, dir: &Path) -> Result<SeedSummary, AppError> {
        let mut summary = SeedSummary::default();

        let mut user_ids = HashMap::new();
        for seed in read_seed_file::<SeedUser>(dir, "users.json").await? {
            let param = CreateUserParam::from_admin_dto(seed.user)?;
            let password_hash = hash_password(param.password, self.bcrypt_cost).await?;
            let user = UserRepository::new(self.db)
                .create(NewUser {
                    name: param.name,
                    email: param.email,
                    role: param.role,
                    password_hash,
                })
                .await?;

            user_ids.insert(seed.id, user.id);
            summary.users += 1;
        }

        let mut bootcamp_ids = HashMap::new();
        for seed in read_seed_file::<SeedBootcamp>(dir, "bootcamps.json").await? {
            let user_id = resolve(&user_ids, "user", &seed.user)?;
            let param = CreateBootcampParam::from_dto(seed.bootcamp)?;

            let location = match self.geocoder {
                Some(geocoder) => geocoder.geocode(&param.address).await?,
                None => None,
            };
            let bootcamp = BootcampRepository::new(self.db)
                .create(user_id, param, location)
                .await?;

            bootcamp_ids.insert(seed.id, bootcamp.id);
            summary.bootcamps += 1;
        }

        for seed in read_seed_file::<SeedCourse>(dir, "courses.json").await? {
            let bootcamp_id = resolve(&bootcamp_ids, "bootcamp", &seed.bootcamp)?;
            let user_id = resolve(&user_ids, "user", &seed.user)?;
            let param = CreateCourseParam::from_dto(CreateCourseDto {
                title: seed.title,
                description: seed.description,
                weeks: seed.weeks.into_i32("weeks")?,
                tuition: seed.tuition.into_i32("tuition")?,
                minimum_skill: seed.minimum_skill,
                scholarship_available: seed.scholarship_available,
            })?;

            CourseRepository::new(self.db)
                .create(bootcamp_id, user_id, param)
                .await?;
            tracing::debug!("Imported course {}", seed.id);
            summary.courses += 1;
        }

        for seed in read_seed_file::<SeedReview>(dir, "reviews.json").await? {
            let bootcamp_id = resolve(&bootcamp_ids, "bootcamp", &seed.bootcamp)?;
            let user_id = resolve(&user_ids, "user", &seed.user)?;
            let param = CreateReviewParam::from_dto(seed.review)?;

            ReviewRepository::new(self.db)
                .create(bootcamp_id, user_id, param)
                .await?;
            tracing::debug!("Imported review {}", seed.id);
            summary.reviews += 1;
        }

        let courses = CourseService::new(self.db);
        let reviews = ReviewService::new(self.db);
        for &bootcamp_id in bootcamp_ids.values() {
            courses.refresh_average_cost(bootcamp_id).await?;
            reviews.refresh_average_rating(bootcamp_id).await?;
        }

        tracing::info!("Data imported: {:?}", summary);
        Ok(summary)
    }

    /// Removes every record from every table.
    pub async fn destroy(&self) -> Result<SeedSummary, AppError> {
        let summary = SeedSummary {
            reviews: ReviewRepository::new(self.db).delete_all().await?,
            courses: CourseRepository::new(self.db).delete_all().await?,
            bootcamps: BootcampRepository::new(self.db).delete_all().await?,
            users: UserRepository::new(self.db).delete_all().await?,
        };

        tracing::info!("Data destroyed: {:?}", summary);
        Ok(summary)
    }
}

async fn read_seed_file<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, AppError> {
    let path = dir.join(name);
    if !tokio::fs::try_exists(&path).await? {
        tracing::warn!("Seed file {} not found, skipping", path.display());
        return Ok(Vec::new());
    }

    let content = tokio::fs::read_to_string(&path).await?;
    Ok(serde_json::from_str(&content)?)
}

fn resolve(ids: &HashMap<String, i32>, kind: &str, seed_id: &str) -> Result<i32, AppError> {
    ids.get(seed_id).copied().ok_or_else(|| {
        AppError::BadRequest(format!("Seed data references unknown {} '{}'", kind, seed_id))
    })
}
