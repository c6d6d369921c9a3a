//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! The `query` module translates advanced list queries (filters, sort, pagination) into
//! SeaORM selects shared by every listing repository.

pub mod bootcamp;
pub mod course;
pub mod query;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
