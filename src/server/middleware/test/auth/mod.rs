use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, AuthToken},
        service::auth::jwt::JwtService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod token;

fn jwt() -> JwtService {
    JwtService::new("test_jwt_secret", 30)
}
