use crate::server::{error::AppError, model::user::User};

mod auth;
mod bootcamp;
mod course;
mod review;
mod user;

/// Converts a factory-created user into the domain model services act on.
fn actor(model: entity::user::Model) -> Result<User, AppError> {
    User::from_entity(model)
}
