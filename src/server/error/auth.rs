use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::user::Role, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No token was sent in the `Authorization` header or `token` cookie.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authentication token provided")]
    MissingToken,

    /// The token could not be verified (bad signature, malformed, or expired).
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to verify authentication token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token is valid but the user it names no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Login attempted without an email or password.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Login attempted without email or password")]
    MissingCredentials,

    /// Unknown email or wrong password.
    ///
    /// Results in a 401 Unauthorized response. The same message is used for both cases
    /// so the response does not reveal which accounts exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user's role is not allowed on the route.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User role {0} is not authorized to access this route")]
    RoleNotAuthorized(Role),

    /// The user is neither the owner of the resource nor an admin.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} is not authorized to {action}")]
    NotOwner { user_id: i32, action: String },

    /// Password reset token is unknown or expired.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired password reset token")]
    InvalidResetToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems are logged at debug level and answered with the same generic
/// "Not authorized to access this route" message regardless of the cause.
///
/// # Returns
/// - 400 Bad Request - Missing credentials on login, invalid reset token
/// - 401 Unauthorized - Missing/invalid token, deleted user, invalid credentials
/// - 403 Forbidden - Role or ownership checks failed
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Not authorized to access this route",
                )
            }
            Self::MissingCredentials => error_response(
                StatusCode::BAD_REQUEST,
                "Please provide an email and password",
            ),
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            Self::InvalidResetToken => error_response(StatusCode::BAD_REQUEST, "Invalid token"),
            Self::RoleNotAuthorized(_) | Self::NotOwner { .. } => {
                error_response(StatusCode::FORBIDDEN, &self.to_string())
            }
        }
    }
}
