use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use std::str::FromStr;

use crate::{
    model::{
        api::{AdvancedResultsDto, ApiResponse, EmptyDto, ErrorDto, ListResponse},
        bootcamp::{BootcampDetailDto, BootcampDto, CreateBootcampDto, UpdateBootcampDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, AuthToken},
            extract::{Json, Path, Query},
        },
        model::{
            bootcamp::{Bootcamp, BootcampWithCourses, CreateBootcampParam, UpdateBootcampParam},
            course::Course,
            query::AdvancedQuery,
        },
        service::{bootcamp::BootcampService, upload::PhotoUpload},
        state::AppState,
        util::geo::DistanceUnit,
    },
};

/// Tag for grouping bootcamp endpoints in OpenAPI documentation
pub static BOOTCAMP_TAG: &str = "bootcamp";

const WRITE_ROLES: [Role; 2] = [Role::Publisher, Role::Admin];

/// Get bootcamps.
///
/// Supports filtering on any bootcamp field (`averageCost[lte]=10000`, `careers[in]=Business`,
/// `housing=true`), `select`, `sort`, `page` and `limit`.
///
/// # Returns
/// - `200 OK` - One page of bootcamps
/// - `400 Bad Request` - Unknown filter field or operator, or malformed value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps",
    tag = BOOTCAMP_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, `-` for descending (default: -createdAt)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Retrieved bootcamps", body = AdvancedResultsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamps(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let query = AdvancedQuery::parse(&pairs, state.page_defaults())?;

    let results = BootcampService::new(&state.db, state.geocoder.as_ref())
        .get_all(&query)
        .await?;

    Ok(Json(results.map(Bootcamp::into_dto).into_dto(&query)?))
}

/// Get a single bootcamp with its courses.
///
/// # Returns
/// - `200 OK` - The bootcamp
/// - `400 Bad Request` - No bootcamp with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    responses(
        (status = 200, description = "Retrieved bootcamp", body = ApiResponse<BootcampDetailDto>),
        (status = 400, description = "No bootcamp with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamp(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let BootcampWithCourses { bootcamp, courses } =
        BootcampService::new(&state.db, state.geocoder.as_ref())
            .get_by_id(id)
            .await?;

    let detail = BootcampDetailDto {
        bootcamp: bootcamp.into_dto(),
        courses: courses.into_iter().map(Course::into_dto).collect(),
    };

    Ok(Json(ApiResponse::new("Retrieved bootcamp", detail)))
}

/// Create a bootcamp.
///
/// The address is geocoded and the caller becomes the owner. Publishers may own one
/// bootcamp.
///
/// # Access Control
/// - `Publisher` - One bootcamp per publisher
/// - `Admin` - Unlimited
///
/// # Arguments
/// - `state` - Application state containing the database connection and geocoder
/// - `token` - Token sent with the request
/// - `payload` - Bootcamp data
///
/// # Returns
/// - `201 Created` - The created bootcamp
/// - `400 Bad Request` - Invalid data, duplicate name, or publisher already owns a bootcamp
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed
/// - `500 Internal Server Error` - Database or geocoder error
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps",
    tag = BOOTCAMP_TAG,
    request_body = CreateBootcampDto,
    responses(
        (status = 201, description = "Created bootcamp", body = ApiResponse<BootcampDto>),
        (status = 400, description = "Invalid bootcamp data", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Role not authorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bootcamp(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<CreateBootcampDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    let param = CreateBootcampParam::from_dto(payload)?;
    let bootcamp = BootcampService::new(&state.db, state.geocoder.as_ref())
        .create(&user, param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Created bootcamp", bootcamp.into_dto())),
    ))
}

/// Update a bootcamp.
///
/// A changed address is geocoded again.
///
/// # Access Control
/// - `Publisher` - Own bootcamp only
/// - `Admin` - Any bootcamp
///
/// # Returns
/// - `200 OK` - The updated bootcamp
/// - `400 Bad Request` - Invalid data or no bootcamp with that ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed or not the owner
#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    request_body = UpdateBootcampDto,
    responses(
        (status = 200, description = "Updated bootcamp", body = ApiResponse<BootcampDto>),
        (status = 400, description = "Invalid data or bootcamp not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not the owner of the bootcamp", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bootcamp(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBootcampDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    let param = UpdateBootcampParam::from_dto(payload)?;
    let bootcamp = BootcampService::new(&state.db, state.geocoder.as_ref())
        .update(&user, id, param)
        .await?;

    Ok(Json(ApiResponse::new("Updated bootcamp", bootcamp.into_dto())))
}

/// Delete a bootcamp together with its courses and reviews.
///
/// # Access Control
/// - `Publisher` - Own bootcamp only
/// - `Admin` - Any bootcamp
///
/// # Returns
/// - `200 OK` - Bootcamp deleted
/// - `400 Bad Request` - No bootcamp with that ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed or not the owner
#[utoipa::path(
    delete,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    responses(
        (status = 200, description = "Deleted bootcamp", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Bootcamp not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not the owner of the bootcamp", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bootcamp(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    BootcampService::new(&state.db, state.geocoder.as_ref())
        .delete(&user, id)
        .await?;

    Ok(Json(ApiResponse::new("Deleted bootcamp", EmptyDto {})))
}

/// Get bootcamps within a distance of a zipcode.
///
/// # Arguments
/// - `zipcode` - Zipcode geocoded as the search centre
/// - `distance` - Search radius
/// - `unit` - `mi` or `km`
///
/// # Returns
/// - `200 OK` - Bootcamps inside the radius
/// - `400 Bad Request` - Unknown unit, non-positive distance, or zipcode not found
/// - `500 Internal Server Error` - Database or geocoder error
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/radius/{zipcode}/{distance}/{unit}",
    tag = BOOTCAMP_TAG,
    params(
        ("zipcode" = String, Path, description = "Zipcode of the search centre"),
        ("distance" = f64, Path, description = "Search radius"),
        ("unit" = String, Path, description = "Distance unit, `mi` or `km`")
    ),
    responses(
        (status = 200, description = "Bootcamps inside the radius", body = ListResponse<BootcampDto>),
        (status = 400, description = "Invalid radius query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamps_in_radius(
    State(state): State<AppState>,
    Path((zipcode, distance, unit)): Path<(String, f64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let unit = DistanceUnit::from_str(&unit)?;

    let bootcamps = BootcampService::new(&state.db, state.geocoder.as_ref())
        .get_in_radius(&zipcode, distance, unit)
        .await?;

    Ok(Json(ListResponse::new(
        "Retrieved bootcamps",
        bootcamps.into_iter().map(Bootcamp::into_dto).collect(),
    )))
}

/// Upload a bootcamp photo.
///
/// Expects a multipart body with the image in the `file` field. The photo is stored as
/// `photo_{id}{ext}` and served under `/uploads`.
///
/// # Access Control
/// - `Publisher` - Own bootcamp only
/// - `Admin` - Any bootcamp
///
/// # Returns
/// - `200 OK` - The bootcamp with its new photo
/// - `400 Bad Request` - No file, not an image, too large, or bootcamp not found
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed or not the owner
#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}/photo",
    tag = BOOTCAMP_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 200, description = "Uploaded photo", body = ApiResponse<BootcampDto>),
        (status = 400, description = "Invalid upload or bootcamp not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not the owner of the bootcamp", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_bootcamp_photo(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    WithRejection(mut multipart, _): WithRejection<Multipart, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    let max_bytes = state.config.max_file_upload;
    let upload = PhotoUpload::from_multipart(&mut multipart, max_bytes).await?;

    let bootcamp = BootcampService::new(&state.db, state.geocoder.as_ref())
        .upload_photo(&user, id, upload, &state.config.file_upload_path, max_bytes)
        .await?;

    Ok(Json(ApiResponse::new("Uploaded photo", bootcamp.into_dto())))
}
