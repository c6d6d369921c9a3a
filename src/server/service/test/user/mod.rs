use crate::server::{data::bootcamp::BootcampRepository, error::AppError, service::user::UserService};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, course::CourseFactory, helpers::create_bootcamp_with_publisher,
        review::ReviewFactory, user::UserFactory,
    },
};

mod delete;

const BCRYPT_COST: u32 = 4;
