//! DevCamper API backend.
//!
//! Axum serves the HTTP API and SeaORM persists users, bootcamps, courses and reviews in
//! SQLite. Code is split by responsibility:
//!
//! - `controller/` - route handlers: role checks, DTO to parameter conversion, response envelopes
//! - `service/` - business rules such as ownership, derived averages, geocoding, password reset
//!   emails, photo uploads and seeding
//! - `data/` - repositories translating advanced queries into SeaORM selects and converting
//!   entities into domain models
//! - `model/` - domain models, validated parameters and the advanced query type
//! - `middleware/` - token extraction and the role guard
//! - `error/` - `AppError` and its mapping to `{success: false, message, error}` responses
//! - `util/` - validation, number parsing and great-circle helpers
//!
//! `config`, `startup`, `state` and `router` wire these together at launch.
//!
//! Handlers never touch the database directly. A request passes router, controller,
//! service and repository in that order; the domain model travels back up and is turned
//! into a DTO by the controller.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
