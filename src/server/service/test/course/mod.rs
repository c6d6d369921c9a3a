use super::actor;
use crate::{
    model::course::MinimumSkill,
    server::{
        data::bootcamp::BootcampRepository,
        error::{auth::AuthError, AppError},
        model::course::{CreateCourseParam, UpdateCourseParam},
        service::course::CourseService,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, course::CourseFactory, helpers::create_bootcamp_with_publisher},
};

mod create;
mod refresh_average_cost;

fn course_param(tuition: i32) -> CreateCourseParam {
    CreateCourseParam {
        title: "Full Stack Web Development".to_string(),
        description: "Node, Express and React".to_string(),
        weeks: 12,
        tuition,
        minimum_skill: MinimumSkill::Intermediate,
        scholarship_available: false,
    }
}
