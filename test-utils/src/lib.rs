//! Test fixtures for the DevCamper API.
//!
//! Tests build a throwaway in-memory SQLite schema with [`builder::TestBuilder`] and fill
//! it through the [`factory`] module, which inserts users, bootcamps, courses and reviews
//! with unique default names.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn publisher_owns_bootcamp() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (publisher, bootcamp) = factory::helpers::create_bootcamp_with_publisher(db).await?;
//!     assert_eq!(bootcamp.user_id, publisher.id);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
