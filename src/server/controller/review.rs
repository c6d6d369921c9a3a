use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{AdvancedResultsDto, ApiResponse, EmptyDto, ErrorDto, ListResponse},
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, AuthToken},
            extract::{Json, Path, Query},
        },
        model::{
            query::AdvancedQuery,
            review::{CreateReviewParam, Review, UpdateReviewParam},
        },
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

const WRITE_ROLES: [Role; 2] = [Role::User, Role::Admin];

/// Get reviews across all bootcamps.
///
/// # Returns
/// - `200 OK` - One page of reviews, each with its bootcamp summary
/// - `400 Bad Request` - Invalid query
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = REVIEW_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, `-` for descending (default: -createdAt)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Retrieved Reviews", body = AdvancedResultsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let query = AdvancedQuery::parse(&pairs, state.page_defaults())?;

    let results = ReviewService::new(&state.db).get_all(&query).await?;

    Ok(Json(results.map(Review::into_dto).into_dto(&query)?))
}

/// Get the reviews of a bootcamp.
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    responses(
        (status = 200, description = "Retrieved Reviews", body = ListResponse<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamp_reviews(
    State(state): State<AppState>,
    Path(bootcamp_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .get_by_bootcamp(bootcamp_id)
        .await?;

    Ok(Json(ListResponse::new(
        "Retrieved Reviews",
        reviews.into_iter().map(Review::into_dto).collect(),
    )))
}

/// Get a single review.
///
/// # Returns
/// - `200 OK` - The review with its bootcamp summary
/// - `404 Not Found` - No review with that ID
#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Retrieved Review", body = ApiResponse<ReviewDto>),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let review = ReviewService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::new("Retrieved Review", review.into_dto())))
}

/// Review a bootcamp.
///
/// A user may review each bootcamp once. Recomputes the bootcamp's average rating.
///
/// # Access Control
/// - `User` - One review per bootcamp
/// - `Admin` - One review per bootcamp
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Invalid data or bootcamp already reviewed
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No bootcamp with that ID
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps/{id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid data or duplicate review", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Role not authorized", body = ErrorDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    token: AuthToken,
    Path(bootcamp_id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    let param = CreateReviewParam::from_dto(payload)?;
    let review = ReviewService::new(&state.db)
        .create(&user, bootcamp_id, param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Review created", review.into_dto())),
    ))
}

/// Update a review.
///
/// # Access Control
/// - `User` - Own reviews only
/// - `Admin` - Any review
///
/// # Returns
/// - `200 OK` - The updated review
/// - `400 Bad Request` - Invalid data
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed or not the author
/// - `404 Not Found` - No review with that ID
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review Updated", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not the author of the review", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    let param = UpdateReviewParam::from_dto(payload)?;
    let review = ReviewService::new(&state.db)
        .update(&user, id, param)
        .await?;

    Ok(Json(ApiResponse::new("Review Updated", review.into_dto())))
}

/// Delete a review.
///
/// # Access Control
/// - `User` - Own reviews only
/// - `Admin` - Any review
///
/// # Returns
/// - `200 OK` - Review deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role not allowed or not the author
/// - `404 Not Found` - No review with that ID
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review Deleted", body = ApiResponse<EmptyDto>),
        (status = 401, description = "Not authorized to access this route", body = ErrorDto),
        (status = 403, description = "Not the author of the review", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&WRITE_ROLES)
        .await?;

    ReviewService::new(&state.db).delete(&user, id).await?;

    Ok(Json(ApiResponse::new("Review Deleted", EmptyDto {})))
}
