use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Field, Student};
///
/// let test = TestBuilder::new()
///     .with_table(Field)
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after all tables exist.
    ///
    /// Entity-derived schemas don't carry composite unique indexes, so tests that rely on
    /// them (such as the mark upsert) add them explicitly.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to run after the tables are created.
    ///
    /// # Arguments
    /// - `index` - Index statement to execute
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for student, subject and mark operations.
    ///
    /// Adds in dependency order:
    /// - Field
    /// - Student
    /// - Subject
    /// - Mark (with the unique `(student_id, subject_id)` index)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_student_tables(self) -> Self {
        self.with_table(Field)
            .with_table(Student)
            .with_table(Subject)
            .with_table(Mark)
            .with_index(
                Index::create()
                    .name("idx_mark_student_subject")
                    .table(Mark)
                    .col(entity::mark::Column::StudentId)
                    .col(entity::mark::Column::SubjectId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds every table in the schema, including dashboard user accounts.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_table(User).with_student_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
