//! Account registration, login and password management.
//!
//! Every successful operation that establishes a session returns the user together with
//! a freshly signed token; the controller turns it into the response body and cookie.

pub mod jwt;
pub mod password;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, NewUser, UpdateUserParam, User},
    service::{
        auth::{
            jwt::JwtService,
            password::{digest_reset_token, generate_reset_token, hash_password, verify_password},
        },
        mailer::{EmailMessage, Mailer},
    },
};

/// Minutes a password reset token stays valid.
pub const RESET_TOKEN_EXPIRE_MINUTES: i64 = 10;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            jwt,
            bcrypt_cost,
        }
    }

    /// Registers a new account and signs a token for it.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The created user and its token
    /// - `Err(AppError::DbErr)` - Email already registered (400 on response) or database error
    pub async fn register(&self, param: CreateUserParam) -> Result<(User, String), AppError> {
        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;

        let user = UserRepository::new(self.db)
            .create(NewUser {
                name: param.name,
                email: param.email,
                role: param.role,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.role);

        let token = self.jwt.create_token(user.id)?;
        Ok((user, token))
    }

    /// Checks credentials and signs a token.
    ///
    /// # Arguments
    /// - `email` - Email from the request, if sent
    /// - `password` - Password from the request, if sent
    ///
    /// # Returns
    /// - `Ok((User, String))` - The authenticated user and its token
    /// - `Err(AuthError::MissingCredentials)` - Email or password missing
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<(User, String), AppError> {
        let (Some(email), Some(password)) = (
            email.filter(|e| !e.trim().is_empty()),
            password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::MissingCredentials.into());
        };

        let email = email.trim().to_lowercase();
        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.create_token(user.id)?;
        Ok((user, token))
    }

    /// Updates the name and email of the calling user.
    pub async fn update_details(&self, user_id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(user_id, param)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    /// Changes the password after checking the current one.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and a new token
    /// - `Err(AppError::BadRequest)` - New password too short
    /// - `Err(AuthError::InvalidCredentials)` - Current password does not match
    pub async fn update_password(
        &self,
        user: &User,
        current_password: String,
        new_password: String,
    ) -> Result<(User, String), AppError> {
        crate::server::util::validate::password(&new_password)?;

        if !verify_password(current_password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = hash_password(new_password, self.bcrypt_cost).await?;
        let user = UserRepository::new(self.db)
            .set_password(user.id, password_hash)
            .await?;

        let token = self.jwt.create_token(user.id)?;
        Ok((user, token))
    }

    /// Stores a reset token for the account and emails the reset link.
    ///
    /// # Arguments
    /// - `mailer` - Transport used for the reset email
    /// - `email` - Address of the account
    /// - `reset_url_base` - URL the raw token is appended to
    ///
    /// # Returns
    /// - `Ok(())` - Email sent
    /// - `Err(AppError::NotFound)` - No account with that email
    /// - `Err(AppError::EmailErr)` - Sending failed; the stored token is cleared again
    pub async fn forgot_password(
        &self,
        mailer: &dyn Mailer,
        email: &str,
        reset_url_base: &str,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let email = email.trim().to_lowercase();
        let Some(user) = repo.find_by_email(&email).await? else {
            return Err(AppError::NotFound("There is no user with that email".to_string()));
        };

        let (token, digest) = generate_reset_token();
        let expire = Utc::now() + Duration::minutes(RESET_TOKEN_EXPIRE_MINUTES);
        repo.set_reset_token(user.id, Some((digest, expire))).await?;

        let reset_url = format!("{}/{}", reset_url_base.trim_end_matches('/'), token);
        let message = EmailMessage {
            to: user.email.clone(),
            subject: "Password reset token".to_string(),
            text: format!(
                "You are receiving this email because you (or someone else) has requested the reset of a password. Please make a PUT request to: \n\n {}",
                reset_url
            ),
        };

        if let Err(err) = mailer.send(message).await {
            repo.set_reset_token(user.id, None).await?;
            return Err(err);
        }

        Ok(())
    }

    /// Sets a new password using an emailed reset token.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and a new token
    /// - `Err(AuthError::InvalidResetToken)` - Token unknown or expired
    /// - `Err(AppError::BadRequest)` - New password too short
    pub async fn reset_password(
        &self,
        reset_token: &str,
        new_password: String,
    ) -> Result<(User, String), AppError> {
        let repo = UserRepository::new(self.db);

        let digest = digest_reset_token(reset_token);
        let Some(user) = repo.find_by_reset_token(&digest, Utc::now()).await? else {
            return Err(AuthError::InvalidResetToken.into());
        };

        crate::server::util::validate::password(&new_password)?;

        let password_hash = hash_password(new_password, self.bcrypt_cost).await?;
        let user = repo.set_password(user.id, password_hash).await?;

        let token = self.jwt.create_token(user.id)?;
        Ok((user, token))
    }
}
