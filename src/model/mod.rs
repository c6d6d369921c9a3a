//! Data transfer objects exchanged over the HTTP API.
//!
//! All DTOs serialize with camelCase field names, matching the query-string field names
//! accepted by the list endpoints for filtering and sorting.

pub mod api;
pub mod auth;
pub mod bootcamp;
pub mod course;
pub mod review;
pub mod user;
