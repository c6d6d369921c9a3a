//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let publisher = factory::user::UserFactory::new(&db).role("publisher").build().await?;
//!     let bootcamp = factory::create_bootcamp(&db, publisher.id).await?;
//!     let course = factory::course::CourseFactory::new(&db, bootcamp.id, publisher.id)
//!         .tuition(12000)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities (password `123456` unless overridden)
//! - `bootcamp` - Create bootcamp entities
//! - `course` - Create course entities
//! - `review` - Create review entities
//! - `helpers` - ID generation and convenience methods for creating entities with dependencies

pub mod bootcamp;
pub mod course;
pub mod helpers;
pub mod review;
pub mod user;

pub use bootcamp::create_bootcamp;
pub use course::create_course;
pub use review::create_review;
pub use user::create_user;
