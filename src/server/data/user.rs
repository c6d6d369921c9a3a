//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! account creation, credential and reset token updates, lookups and the admin listing,
//! converting between entity models and domain models at the infrastructure boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{
    data::query::{fetch_page, FieldKind, QueryField},
    error::AppError,
    model::{
        query::{AdvancedQuery, AdvancedResults},
        user::{NewUser, UpdateUserParam, User},
    },
};

use entity::user::Column;

/// Fields of users that list queries may filter and sort on.
pub const USER_QUERY_FIELDS: &[QueryField<Column>] = &[
    QueryField::new("id", Column::Id, FieldKind::Integer),
    QueryField::new("name", Column::Name, FieldKind::Text),
    QueryField::new("email", Column::Email, FieldKind::Text),
    QueryField::new("role", Column::Role, FieldKind::Text),
    QueryField::new("createdAt", Column::CreatedAt, FieldKind::DateTime),
];

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `user` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            role: ActiveValue::Set(user.role.as_str().to_string()),
            password: ActiveValue::Set(user.password_hash),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expire: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email address.
    ///
    /// Emails are stored lowercased, so callers should pass a normalized address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds the user holding an unexpired password reset token.
    ///
    /// # Arguments
    /// - `token_hash` - SHA-256 hex digest of the token sent by email
    /// - `now` - Current time; tokens expiring at or before it are ignored
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with a matching, still valid token
    /// - `Ok(None)` - No such token, or it has expired
    /// - `Err(AppError)` - Database error
    pub async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(Column::ResetPasswordToken.eq(token_hash))
            .filter(Column::ResetPasswordExpire.gt(now))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Applies a partial update to an account.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error, including a unique violation on email
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }

        let entity = active.update(self.db).await?;
        User::from_entity(entity).map(Some)
    }

    /// Replaces the password hash and clears any pending reset token.
    pub async fn set_password(&self, id: i32, password_hash: String) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password: ActiveValue::Set(password_hash),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expire: ActiveValue::Set(None),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Stores or clears the password reset token of a user.
    ///
    /// # Arguments
    /// - `id` - User ID
    /// - `token` - Token digest and expiry to store, or `None` to clear both columns
    pub async fn set_reset_token(
        &self,
        id: i32,
        token: Option<(String, DateTime<Utc>)>,
    ) -> Result<(), AppError> {
        let (hash, expire) = match token {
            Some((hash, expire)) => (Some(hash), Some(expire)),
            None => (None, None),
        };

        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            reset_password_token: ActiveValue::Set(hash),
            reset_password_expire: ActiveValue::Set(expire),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes an account.
    ///
    /// # Returns
    /// - `Ok(true)` - The user existed and was deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Lists users with filtering, sorting and pagination.
    pub async fn get_advanced(&self, query: &AdvancedQuery) -> Result<AdvancedResults<User>, AppError> {
        let (models, total) = fetch_page(
            self.db,
            entity::prelude::User::find(),
            USER_QUERY_FIELDS,
            query,
            Column::Id,
        )
        .await?;

        Ok(AdvancedResults {
            items: models
                .into_iter()
                .map(User::from_entity)
                .collect::<Result<Vec<_>, _>>()?,
            total,
            pagination: query.pagination(total),
        })
    }

    /// Deletes every account, used by the seeder.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = entity::prelude::User::delete_many().exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
