use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// In-memory SQLite database prepared for a single test.
///
/// `db` is public so tests can borrow the connection with `test.db.as_ref().unwrap()` and
/// clone it into application state when a router is needed.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening a fresh `sqlite::memory:` database on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db.as_ref().ok_or(TestError::NotConnected)
    }

    /// Creates the given tables, then the given indexes.
    ///
    /// Tables must be listed parents first so foreign keys resolve.
    pub async fn apply_schema(
        &mut self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for table in &tables {
            db.execute(table).await?;
        }
        for index in &indexes {
            db.execute(index).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
