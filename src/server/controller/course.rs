use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{AdvancedResultsDto, ApiResponse, EmptyDto, ErrorDto, ListResponse},
        course::{CourseDto, CreateCourseDto, UpdateCourseDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, AuthToken},
            extract::{Json, Path, Query},
        },
        model::{
            course::{Course, CreateCourseParam, UpdateCourseParam},
            query::AdvancedQuery,
        },
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

const WRITE_ROLES: [Role; 2] = [Role::Publisher, Role::Admin];

/// Get courses across all bootcamps.
///
/// Each course embeds the name and description of its bootcamp. Supports filtering,
/// `select`, `sort`, `page` and `limit`.
///
/// # Returns
/// - `200 OK` - One page of courses
/// - `400 Bad Request` - Invalid query
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = COURSE_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, `-` for descending (default: -createdAt)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Retrieved Courses", body = AdvancedResultsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let query = AdvancedQuery::parse(&pairs, state.page_defaults())?;

    let results = CourseService::new(&state.db).get_all(&query).await?;

    Ok(Json(results.map(Course::into_dto).into_dto(&query)?))
}

/// Get the courses of a bootcamp.
///
/// # Returns
/// - `200 OK` - All courses of the bootcamp, oldest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}/courses",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    responses(
        (status = 200, description = "Retrieved Courses", body = ListResponse<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamp_courses(
    State(state): State<AppState>,
    Path(bootcamp_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .get_by_bootcamp(bootcamp_id)
        .await?;

    Ok(Json(ListResponse::new(
        "Retrieved Courses",
        courses.into_iter().map(Course::into_dto).collect(),
    )))
}

/// Get a single course.
///
/// # Returns
/// - `200 OK` - The course with its bootcamp summary
/// - `400 Bad Request` - No course with that ID
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Retrieved course", body = ApiResponse<CourseDto>),
        (status = 400, description = "No course with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::new("Retrieved course", course.into_dto())))
}

/// Add a course to a bootcamp.
///
/// Recomputes the bootcamp's average cost.
///
/// # Access Control
/// - `Publisher` - Own bootcamp only
/// - `Admin` - Any bootcamp
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `token` - Token sent with the request
/// - `bootcamp_id` - Bootcamp offering the course
/// - `payload` - Course data
///
/// # Returns
/// - `201 Created` - The created course
/// - `400 Bad Request` - Invalid data or no bootcamp with that ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed or not the bootcamp owner
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps/{id}/courses",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Added course", body = ApiResponse<CourseDto>),
        (status = 400, description = "Invalid data or bootcamp not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not the owner of the bootcamp", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    token: AuthToken,
    Path(bootcamp_id): Path<i32>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    let param = CreateCourseParam::from_dto(payload)?;
    let course = CourseService::new(&state.db)
        .create(&user, bootcamp_id, param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Added course", course.into_dto())),
    ))
}

/// Update a course.
///
/// # Access Control
/// - `Publisher` - Own courses only
/// - `Admin` - Any course
///
/// # Returns
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Invalid data or no course with that ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed or not the owner
#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Updated course", body = ApiResponse<CourseDto>),
        (status = 400, description = "Invalid data or course not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not the owner of the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    let param = UpdateCourseParam::from_dto(payload)?;
    let course = CourseService::new(&state.db)
        .update(&user, id, param)
        .await?;

    Ok(Json(ApiResponse::new("Updated course", course.into_dto())))
}

/// Delete a course.
///
/// # Access Control
/// - `Publisher` - Own courses only
/// - `Admin` - Any course
///
/// # Returns
/// - `200 OK` - Course deleted
/// - `400 Bad Request` - No course with that ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed or not the owner
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Removed course", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Course not found", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not the owner of the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    CourseService::new(&state.db).delete(&user, id).await?;

    Ok(Json(ApiResponse::new("Removed course", EmptyDto {})))
}
