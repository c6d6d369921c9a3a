use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        bootcamp::BootcampRepository, course::CourseRepository, review::ReviewRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        query::{AdvancedQuery, AdvancedResults},
        user::{CreateUserParam, NewUser, UpdateUserParam, User},
    },
    service::{
        auth::password::hash_password, course::CourseService, review::ReviewService,
    },
};

/// Account management for admins.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    pub async fn get_all(&self, query: &AdvancedQuery) -> Result<AdvancedResults<User>, AppError> {
        UserRepository::new(self.db).get_advanced(query).await
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::BadRequest)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Creates an account with any role.
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;

        let user = UserRepository::new(self.db)
            .create(NewUser {
                name: param.name,
                email: param.email,
                role: param.role,
                password_hash,
            })
            .await?;

        tracing::info!("Admin created user {} ({})", user.id, user.role);
        Ok(user)
    }

    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Deletes a user along with their bootcamps, courses and reviews.
    ///
    /// Bootcamps of other publishers that lose a course or review have their average
    /// cost and rating recomputed.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let course_bootcamps = CourseRepository::new(self.db)
            .bootcamp_ids_for_user(id)
            .await?;
        let review_bootcamps = ReviewRepository::new(self.db)
            .bootcamp_ids_for_user(id)
            .await?;

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(user_not_found(id));
        }

        let bootcamps = BootcampRepository::new(self.db);
        for bootcamp_id in course_bootcamps {
            if bootcamps.find_by_id(bootcamp_id).await?.is_some() {
                CourseService::new(self.db)
                    .refresh_average_cost(bootcamp_id)
                    .await?;
            }
        }
        for bootcamp_id in review_bootcamps {
            if bootcamps.find_by_id(bootcamp_id).await?.is_some() {
                ReviewService::new(self.db)
                    .refresh_average_rating(bootcamp_id)
                    .await?;
            }
        }

        tracing::info!("Deleted user {}", id);
        Ok(())
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::BadRequest(format!("User not found with id of {}", id))
}
