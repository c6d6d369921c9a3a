use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{AdvancedResultsDto, EmptyDto, ErrorDto, PageRefDto, PaginationDto},
        auth::{
            ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto, TokenResponseDto,
            UpdateDetailsDto, UpdatePasswordDto,
        },
        bootcamp::{
            BootcampDetailDto, BootcampDto, BootcampSummaryDto, CreateBootcampDto, LocationDto,
            UpdateBootcampDto,
        },
        course::{CourseDto, CreateCourseDto, MinimumSkill, UpdateCourseDto},
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
        user::{CreateUserDto, Role, UpdateUserDto, UserDto},
    },
    server::{
        controller::{auth, bootcamp, course, review, user},
        middleware::auth::TOKEN_COOKIE,
        state::AppState,
    },
};

/// Extra room on top of the photo size for multipart framing and other fields.
const MULTIPART_OVERHEAD: u64 = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        welcome,
        auth::register,
        auth::login,
        auth::logout,
        auth::get_me,
        auth::update_details,
        auth::update_password,
        auth::forgot_password,
        auth::reset_password,
        bootcamp::get_bootcamps,
        bootcamp::get_bootcamp,
        bootcamp::create_bootcamp,
        bootcamp::update_bootcamp,
        bootcamp::delete_bootcamp,
        bootcamp::get_bootcamps_in_radius,
        bootcamp::upload_bootcamp_photo,
        course::get_courses,
        course::get_bootcamp_courses,
        course::get_course,
        course::create_course,
        course::update_course,
        course::delete_course,
        review::get_reviews,
        review::get_bootcamp_reviews,
        review::get_review,
        review::create_review,
        review::update_review,
        review::delete_review,
        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
    ),
    components(schemas(
        ErrorDto,
        EmptyDto,
        PageRefDto,
        PaginationDto,
        AdvancedResultsDto,
        RegisterDto,
        LoginDto,
        UpdateDetailsDto,
        UpdatePasswordDto,
        ForgotPasswordDto,
        ResetPasswordDto,
        TokenResponseDto,
        LocationDto,
        BootcampDto,
        BootcampDetailDto,
        BootcampSummaryDto,
        CreateBootcampDto,
        UpdateBootcampDto,
        MinimumSkill,
        CourseDto,
        CreateCourseDto,
        UpdateCourseDto,
        ReviewDto,
        CreateReviewDto,
        UpdateReviewDto,
        Role,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
    )),
    tags(
        (name = "auth", description = "Registration, login and account self-service"),
        (name = "bootcamp", description = "Bootcamps, radius search and photos"),
        (name = "course", description = "Courses offered by bootcamps"),
        (name = "review", description = "Bootcamp reviews and ratings"),
        (name = "user", description = "User administration"),
    ),
    info(
        title = "DevCamper API",
        description = "Backend API for the DevCamper bootcamp directory"
    )
)]
pub struct ApiDoc;

/// Declares the two ways a token can be sent.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
        components.add_security_scheme(
            "cookie_auth",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(TOKEN_COOKIE))),
        );
    }
}

/// Welcome message served at the API root.
#[utoipa::path(
    get,
    path = "/api/v1",
    responses(
        (status = 200, description = "API is up")
    ),
)]
pub async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "Welcome to the DevCamper API",
        "docs": "/api-docs",
    }))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", get(auth::logout))
        .route("/auth/me", get(auth::get_me))
        .route("/auth/updatedetails", put(auth::update_details))
        .route("/auth/updatepassword", put(auth::update_password))
        .route("/auth/forgotpassword", post(auth::forgot_password))
        .route("/auth/resetpassword/{resettoken}", put(auth::reset_password))
        .route(
            "/bootcamps",
            get(bootcamp::get_bootcamps).post(bootcamp::create_bootcamp),
        )
        .route(
            "/bootcamps/radius/{zipcode}/{distance}/{unit}",
            get(bootcamp::get_bootcamps_in_radius),
        )
        .route(
            "/bootcamps/{id}",
            get(bootcamp::get_bootcamp)
                .put(bootcamp::update_bootcamp)
                .delete(bootcamp::delete_bootcamp),
        )
        .route("/bootcamps/{id}/photo", put(bootcamp::upload_bootcamp_photo))
        .route(
            "/bootcamps/{id}/courses",
            get(course::get_bootcamp_courses).post(course::create_course),
        )
        .route(
            "/bootcamps/{id}/reviews",
            get(review::get_bootcamp_reviews).post(review::create_review),
        )
        .route("/courses", get(course::get_courses))
        .route(
            "/courses/{id}",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route("/reviews", get(review::get_reviews))
        .route(
            "/reviews/{id}",
            get(review::get_review)
                .put(review::update_review)
                .delete(review::delete_review),
        )
        .route("/users", get(user::get_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
}

/// Builds the application router.
///
/// Mounts the API under `/api/v1`, the Swagger UI under `/api-docs` and stored photos
/// under `/uploads`.
pub fn router(state: AppState) -> Router {
    let body_limit = (state.config.max_file_upload + MULTIPART_OVERHEAD) as usize;
    let uploads = ServeDir::new(&state.config.file_upload_path);

    Router::new()
        .nest("/api/v1", api_routes())
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
