use axum::{
    extract::State,
    http::{header::HOST, HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::{Duration, OffsetDateTime};

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        auth::{
            ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto, TokenResponseDto,
            UpdateDetailsDto, UpdatePasswordDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, AuthToken, LOGGED_OUT_TOKEN, TOKEN_COOKIE},
            extract::{Json, Path},
        },
        model::user::{CreateUserParam, UpdateUserParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Seconds the logout cookie stays alive.
const LOGOUT_COOKIE_SECONDS: i64 = 10;

/// Builds the response shared by every endpoint that issues a token.
///
/// The token is returned in the body and set as an `HttpOnly` cookie expiring after the
/// configured number of days. The cookie is marked `Secure` in production.
fn token_response(
    state: &AppState,
    message: &str,
    token: String,
) -> (StatusCode, CookieJar, Json<TokenResponseDto>) {
    let cookie = Cookie::build((TOKEN_COOKIE, token.clone()))
        .http_only(true)
        .path("/")
        .secure(state.config.production)
        .expires(OffsetDateTime::now_utc() + Duration::days(state.config.jwt_cookie_expire_days));

    (
        StatusCode::OK,
        CookieJar::new().add(cookie),
        Json(TokenResponseDto {
            success: true,
            message: message.to_string(),
            token,
        }),
    )
}

/// Base URL of the password reset endpoint as seen by the client.
///
/// Uses the `Host` header and the `X-Forwarded-Proto` header set by reverse proxies,
/// defaulting to `http`.
fn reset_url_base(headers: &HeaderMap, port: u16) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{}", port));

    format!("{}://{}/api/v1/auth/resetpassword", scheme, host)
}

/// Register a new account.
///
/// Creates a user with the `user` or `publisher` role and signs them in.
///
/// # Arguments
/// - `state` - Application state containing the database connection and JWT service
/// - `payload` - Name, email, password and optional role
///
/// # Returns
/// - `200 OK` - Account created, token returned and set as cookie
/// - `400 Bad Request` - Invalid field, `admin` role requested, or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Registered successfully", body = TokenResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParam::from_register_dto(payload)?;

    let (user, token) = AuthService::new(&state.db, &state.jwt, state.config.bcrypt_cost)
        .register(param)
        .await?;

    tracing::info!("Registered user {} as {}", user.id, user.role);

    Ok(token_response(&state, "Registered successfully", token))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials valid, token returned and set as cookie
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in successfully", body = TokenResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, token) = AuthService::new(&state.db, &state.jwt, state.config.bcrypt_cost)
        .login(payload.email, payload.password)
        .await?;

    Ok(token_response(&state, "Logged In successfully", token))
}

/// Log out.
///
/// Overwrites the token cookie with a placeholder that expires within seconds. Tokens
/// sent through the `Authorization` header stay valid until they expire.
///
/// # Returns
/// - `200 OK` - Cookie cleared
#[utoipa::path(
    get,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<EmptyDto>)
    ),
)]
pub async fn logout() -> impl IntoResponse {
    let cookie = Cookie::build((TOKEN_COOKIE, LOGGED_OUT_TOKEN))
        .http_only(true)
        .path("/")
        .expires(OffsetDateTime::now_utc() + Duration::seconds(LOGOUT_COOKIE_SECONDS));

    (
        CookieJar::new().add(cookie),
        Json(ApiResponse::new("Logged out", EmptyDto {})),
    )
}

/// Get the logged in user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Token missing, invalid or naming a deleted user
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserDto>),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    Ok(Json(ApiResponse::new(
        "Successfully retrieved logged in user details",
        user.into_dto(),
    )))
}

/// Update the name and email of the logged in user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid name or email, or email already registered
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/v1/auth/updatedetails",
    tag = AUTH_TAG,
    request_body = UpdateDetailsDto,
    responses(
        (status = 200, description = "User details updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid details", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_details(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<UpdateDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let param = UpdateUserParam::from_details_dto(payload)?;
    let user = AuthService::new(&state.db, &state.jwt, state.config.bcrypt_cost)
        .update_details(user.id, param)
        .await?;

    Ok(Json(ApiResponse::new("User details updated", user.into_dto())))
}

/// Change the password of the logged in user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Password changed, new token returned and set as cookie
/// - `400 Bad Request` - New password too short
/// - `401 Unauthorized` - Not logged in, or current password wrong
#[utoipa::path(
    put,
    path = "/api/v1/auth/updatepassword",
    tag = AUTH_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = TokenResponseDto),
        (status = 400, description = "Invalid new password", body = ErrorDto),
        (status = 401, description = "Not logged in or current password wrong", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let (_, token) = AuthService::new(&state.db, &state.jwt, state.config.bcrypt_cost)
        .update_password(&user, payload.current_password, payload.new_password)
        .await?;

    Ok(token_response(&state, "Password updated", token))
}

/// Request a password reset email.
///
/// # Returns
/// - `200 OK` - Reset email sent
/// - `404 Not Found` - No account with that email
/// - `500 Internal Server Error` - Email could not be sent
#[utoipa::path(
    post,
    path = "/api/v1/auth/forgotpassword",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Email sent", body = ApiResponse<EmptyDto>),
        (status = 404, description = "There is no user with that email", body = ErrorDto),
        (status = 500, description = "Email could not be sent", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let url_base = reset_url_base(&headers, state.config.port);

    AuthService::new(&state.db, &state.jwt, state.config.bcrypt_cost)
        .forgot_password(state.mailer.as_ref(), &payload.email, &url_base)
        .await?;

    Ok(Json(ApiResponse::new("Email sent", EmptyDto {})))
}

/// Set a new password with an emailed reset token.
///
/// # Returns
/// - `200 OK` - Password reset, new token returned and set as cookie
/// - `400 Bad Request` - Token unknown or expired, or new password too short
#[utoipa::path(
    put,
    path = "/api/v1/auth/resetpassword/{resettoken}",
    tag = AUTH_TAG,
    params(
        ("resettoken" = String, Path, description = "Reset token from the email")
    ),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = TokenResponseDto),
        (status = 400, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(reset_token): Path<String>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.jwt, state.config.bcrypt_cost)
        .reset_password(&reset_token, payload.password)
        .await?;

    tracing::info!("User {} reset their password", user.id);

    Ok(token_response(&state, "Password reset successfully", token))
}
