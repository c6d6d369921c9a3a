use super::advanced_query;
use crate::server::{
    data::bootcamp::BootcampRepository,
    error::AppError,
    model::{bootcamp::CreateBootcampParam, geo::GeoLocation},
    util::geo::{radius_radians, BoundingBox, DistanceUnit},
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    factory::{self, bootcamp::BootcampFactory, helpers::create_bootcamp_with_publisher},
};

mod create;
mod delete;
mod find_in_box;
mod set_average;
