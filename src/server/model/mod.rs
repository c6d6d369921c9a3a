//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs through validating constructors, so the
//! service and data layers only ever see checked input.

pub mod bootcamp;
pub mod course;
pub mod geo;
pub mod query;
pub mod review;
pub mod user;
