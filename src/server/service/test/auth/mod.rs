use super::actor;
use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, UpdateUserParam},
        service::{
            auth::{jwt::JwtService, AuthService},
            mailer::{FailingMailer, MemoryMailer},
        },
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

mod forgot_password;
mod login;
mod register;
mod reset_password;
mod update_password;

const RESET_URL: &str = "http://localhost:5000/api/v1/auth/resetpassword";

fn jwt() -> JwtService {
    JwtService::new("test_jwt_secret", 30)
}
