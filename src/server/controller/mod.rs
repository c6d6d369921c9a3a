//! HTTP request handlers.
//!
//! Handlers authenticate the request through [`AuthGuard`](crate::server::middleware::auth::AuthGuard)
//! where the route requires it, convert request DTOs into validated parameters, call the
//! matching service and wrap the result in the response envelope.

pub mod auth;
pub mod bootcamp;
pub mod course;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
