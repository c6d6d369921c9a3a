use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{AdvancedResultsDto, ApiResponse, EmptyDto, ErrorDto},
        user::{CreateUserDto, Role, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, AuthToken},
            extract::{Json, Path, Query},
        },
        model::{
            query::AdvancedQuery,
            user::{CreateUserParam, UpdateUserParam, User},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - One page of users
/// - `400 Bad Request` - Invalid query
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, `-` for descending (default: -createdAt)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Retrieved users", body = AdvancedResultsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    token: AuthToken,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let query = AdvancedQuery::parse(&pairs, state.page_defaults())?;
    let results = UserService::new(&state.db, state.config.bcrypt_cost)
        .get_all(&query)
        .await?;

    Ok(Json(results.map(User::into_dto).into_dto(&query)?))
}

/// Get a single user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - No user with that ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User retrieved", body = ApiResponse<UserDto>),
        (status = 400, description = "User not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let user = UserService::new(&state.db, state.config.bcrypt_cost)
        .get_by_id(id)
        .await?;

    Ok(Json(ApiResponse::new("User retrieved", user.into_dto())))
}

/// Create a user with any role.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid data or email already registered
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let param = CreateUserParam::from_admin_dto(payload)?;
    let user = UserService::new(&state.db, state.config.bcrypt_cost)
        .create(param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("User created", user.into_dto())),
    ))
}

/// Update a user's name, email or role.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid data or no user with that ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid data or user not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let param = UpdateUserParam::from_admin_dto(payload)?;
    let user = UserService::new(&state.db, state.config.bcrypt_cost)
        .update(id, param)
        .await?;

    Ok(Json(ApiResponse::new("User updated", user.into_dto())))
}

/// Delete a user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - No user with that ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<EmptyDto>),
        (status = 400, description = "User not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    UserService::new(&state.db, state.config.bcrypt_cost)
        .delete(id)
        .await?;

    Ok(Json(ApiResponse::new("User deleted", EmptyDto {})))
}
