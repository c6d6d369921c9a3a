//! Request authentication and role checks.
//!
//! Handlers extract an [`AuthToken`] and pass it to an [`AuthGuard`], which verifies the
//! token, loads the user it names and checks the user's role against the roles the route
//! allows.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;
use std::convert::Infallible;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::User,
        service::auth::jwt::JwtService,
    },
};

/// Name of the cookie carrying the token.
pub const TOKEN_COOKIE: &str = "token";

/// Cookie value written on logout.
pub const LOGGED_OUT_TOKEN: &str = "none";

/// Raw token sent with a request, if any.
///
/// Taken from an `Authorization: Bearer <token>` header, otherwise from the `token` cookie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthToken(pub Option<String>);

impl AuthToken {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let bearer = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        if bearer.is_some() {
            return Self(bearer);
        }

        let cookie = CookieJar::from_headers(headers)
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty() && token != LOGGED_OUT_TOKEN);

        Self(cookie)
    }
}

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    token: &'a AuthToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, token: &'a AuthToken) -> Self {
        Self { db, jwt, token }
    }

    /// Authenticates the request and checks the user's role.
    ///
    /// # Arguments
    /// - `roles` - Roles allowed on the route; empty allows any authenticated user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No token sent
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted user
    /// - `Err(AuthError::RoleNotAuthorized)` - User's role is not in `roles`
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let Some(token) = self.token.0.as_deref() else {
            return Err(AuthError::MissingToken.into());
        };

        let user_id = self.jwt.verify_token(token)?.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::RoleNotAuthorized(user.role).into());
        }

        Ok(user)
    }
}
