//! Subject factory for creating test subject entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subjects belonging to a field.
///
/// # Example
///
/// ```rust,ignore
/// let subject = SubjectFactory::new(&db, field.id).name("Maths").build().await?;
/// ```
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    field_id: i32,
}

impl<'a> SubjectFactory<'a> {
    /// Creates a new SubjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Subject {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `field_id` - ID of the field the subject belongs to
    pub fn new(db: &'a DatabaseConnection, field_id: i32) -> Self {
        Self {
            db,
            name: format!("Subject {}", next_id()),
            field_id,
        }
    }

    /// Sets the name for the subject.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the subject entity into the database.
    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        let now = Utc::now();
        entity::subject::ActiveModel {
            name: ActiveValue::Set(self.name),
            field_id: ActiveValue::Set(self.field_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject with default values in the given field.
pub async fn create_subject(
    db: &DatabaseConnection,
    field_id: i32,
) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db, field_id).build().await
}

/// Creates a subject with a specific name in the given field.
pub async fn create_subject_named(
    db: &DatabaseConnection,
    field_id: i32,
    name: impl Into<String>,
) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db, field_id).name(name).build().await
}
