use super::actor;
use crate::{
    model::bootcamp::{CreateBootcampDto, UpdateBootcampDto},
    server::{
        data::{bootcamp::BootcampRepository, course::CourseRepository},
        error::{auth::AuthError, AppError},
        model::bootcamp::{CreateBootcampParam, UpdateBootcampParam},
        service::{bootcamp::BootcampService, geocoder::StaticGeocoder},
        util::geo::DistanceUnit,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, bootcamp::BootcampFactory, user::UserFactory},
};

mod create;
mod delete;
mod get_in_radius;
mod update;

const BOSTON_ADDRESS: &str = "233 Bay State Rd Boston MA 02215";

fn create_param(name: &str) -> CreateBootcampParam {
    CreateBootcampParam::from_dto(CreateBootcampDto {
        name: name.to_string(),
        description: "Full stack JavaScript bootcamp".to_string(),
        website: Some("https://devworks.com".to_string()),
        phone: None,
        email: None,
        address: BOSTON_ADDRESS.to_string(),
        careers: vec!["Web Development".to_string()],
        housing: false,
        job_assistance: true,
        job_guarantee: false,
        accept_gi: false,
    })
    .unwrap()
}
