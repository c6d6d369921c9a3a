//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including
//! ID generation and convenience methods for creating entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a publisher together with a bootcamp they own.
///
/// # Returns
/// - `Ok((publisher, bootcamp))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bootcamp_with_publisher(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::bootcamp::Model), DbErr> {
    let publisher = crate::factory::user::UserFactory::new(db)
        .role("publisher")
        .build()
        .await?;
    let bootcamp = crate::factory::bootcamp::create_bootcamp(db, publisher.id).await?;

    Ok((publisher, bootcamp))
}
