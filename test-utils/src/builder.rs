use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    DbBackend, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Fluent setup of the schema a test needs.
///
/// Tables are generated from the SeaORM entities. Constraints that only exist in the
/// migrations, such as the one-review-per-user index, are added by [`with_all_tables`].
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Bootcamp, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Bootcamp)
///     .build()
///     .await?;
/// ```
///
/// [`with_all_tables`]: TestBuilder::with_all_tables
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds the table of `entity`. Add referenced tables first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user, bootcamp, course and review tables, plus the unique index on
    /// `(bootcamp_id, user_id)` for reviews.
    pub fn with_all_tables(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .name("idx_review_bootcamp_user")
                .table(Review)
                .col(entity::review::Column::BootcampId)
                .col(entity::review::Column::UserId)
                .unique()
                .to_owned(),
        );

        self.with_table(User)
            .with_table(Bootcamp)
            .with_table(Course)
            .with_table(Review)
    }

    /// Opens the in-memory database and creates the configured schema.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.apply_schema(self.tables, self.indexes).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
