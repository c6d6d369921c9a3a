//! User domain models and parameters.
//!
//! Provides the domain model for application accounts and the validated parameter types
//! used by registration, self-service updates and the admin user management endpoints.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::{RegisterDto, UpdateDetailsDto},
        user::{CreateUserDto, Role, UpdateUserDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        util::validate,
    },
};

/// Application account.
///
/// The password hash and reset token are loaded alongside the public fields so that the
/// auth service can verify credentials, but neither is ever converted into a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Bcrypt hash of the password.
    pub password_hash: String,
    /// SHA-256 hex digest of the pending password reset token.
    pub reset_password_token: Option<String>,
    pub reset_password_expire: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - Public user fields without password or reset token
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity.role.parse::<Role>().map_err(|e| {
            AppError::InternalError(format!("User {} has invalid role: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
            password_hash: entity.password,
            reset_password_token: entity.reset_password_token,
            reset_password_expire: entity.reset_password_expire,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Allows the owner of a resource and admins, rejecting everyone else.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the user owning the resource
    /// - `action` - Description of the attempted action, used in the error message
    ///
    /// # Returns
    /// - `Ok(())` - User owns the resource or is an admin
    /// - `Err(AuthError::NotOwner)` - Neither owner nor admin
    pub fn ensure_owner(&self, owner_id: i32, action: &str) -> Result<(), AuthError> {
        if self.id == owner_id || self.is_admin() {
            return Ok(());
        }

        Err(AuthError::NotOwner {
            user_id: self.id,
            action: action.to_string(),
        })
    }
}

/// Validated input for creating an account.
///
/// Holds the plain password; the auth service hashes it before it reaches the
/// repository as a [`NewUser`].
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserParam {
    /// Builds parameters for public registration.
    ///
    /// Self registration may only pick `user` or `publisher`.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - Validated parameters, role defaulting to `user`
    /// - `Err(AppError::BadRequest)` - Missing or malformed field, or `admin` role requested
    pub fn from_register_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let role = dto.role.unwrap_or(Role::User);
        if role == Role::Admin {
            return Err(AppError::BadRequest(
                "Role must be either user or publisher".to_string(),
            ));
        }

        Self::validated(dto.name, dto.email, dto.password, role)
    }

    /// Builds parameters for an admin creating an account; any role is allowed.
    pub fn from_admin_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Self::validated(
            dto.name,
            dto.email,
            dto.password,
            dto.role.unwrap_or(Role::User),
        )
    }

    fn validated(name: String, email: String, password: String, role: Role) -> Result<Self, AppError> {
        let name = validate::required("name", &name)?;
        let email = validate::email(&validate::required("email", &email)?)?;
        validate::password(&password)?;

        Ok(Self {
            name,
            email,
            password,
            role,
        })
    }
}

/// Account row ready for insertion, password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

/// Partial update of account fields; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUserParam {
    /// Builds parameters for the self-service details update, which cannot change roles.
    pub fn from_details_dto(dto: UpdateDetailsDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(|n| validate::required("name", &n)).transpose()?,
            email: dto.email.map(|e| validate::email(&e)).transpose()?,
            role: None,
        })
    }

    pub fn from_admin_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(|n| validate::required("name", &n)).transpose()?,
            email: dto.email.map(|e| validate::email(&e)).transpose()?,
            role: dto.role,
        })
    }
}
