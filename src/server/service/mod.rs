//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They own the rules that
//! span more than one table or call out of process:
//!
//! - **Ownership**: Only the owner of a bootcamp, course or review (or an admin) may change it
//! - **Derived aggregates**: Bootcamp average cost and rating are recomputed after every
//!   course or review change
//! - **External services**: Geocoding of addresses and delivery of password reset emails

pub mod auth;
pub mod bootcamp;
pub mod course;
pub mod geocoder;
pub mod mailer;
pub mod review;
pub mod seed;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
