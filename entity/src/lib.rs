//! SeaORM entity definitions for the DevCamper database schema.

pub mod prelude;

pub mod bootcamp;
pub mod course;
pub mod review;
pub mod user;
