//! Field factory for creating test field of study entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test fields with customizable values.
///
/// # Example
///
/// ```rust,ignore
/// let field = FieldFactory::new(&db).name("Engineering").build().await?;
/// ```
pub struct FieldFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> FieldFactory<'a> {
    /// Creates a new FieldFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Field {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Field {}", next_id()),
        }
    }

    /// Sets the name for the field.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the field entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::field::Model)` - Created field entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::field::Model, DbErr> {
        let now = Utc::now();
        entity::field::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a field with default values.
///
/// Shorthand for `FieldFactory::new(db).build().await`.
pub async fn create_field(db: &DatabaseConnection) -> Result<entity::field::Model, DbErr> {
    FieldFactory::new(db).build().await
}

/// Creates a field with a specific name.
pub async fn create_field_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::field::Model, DbErr> {
    FieldFactory::new(db).name(name).build().await
}
