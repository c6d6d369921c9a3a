use super::actor;
use crate::server::{
    data::bootcamp::BootcampRepository,
    error::{auth::AuthError, AppError},
    model::review::{CreateReviewParam, UpdateReviewParam},
    service::review::ReviewService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_bootcamp_with_publisher, review::ReviewFactory},
};

mod refresh_average_rating;

fn review_param(rating: i32) -> CreateReviewParam {
    CreateReviewParam {
        title: "Learned a ton!".to_string(),
        text: "Great instructors and material".to_string(),
        rating,
    }
}
