use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, ParentComment};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ParentComment)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the comment backend touches.
    ///
    /// Adds, in order:
    /// - User
    /// - CourseEvaluation
    /// - ParentComment
    /// - SubComment
    /// - CommentLike
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_comment_tables(self) -> Self {
        self.with_table(User)
            .with_table(CourseEvaluation)
            .with_table(ParentComment)
            .with_table(SubComment)
            .with_table(CommentLike)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
