//! Student factory for creating test student entities.
//!
//! Students always belong to a field, so the factory requires a field ID. Passwords are
//! stored as an opaque placeholder since hashing happens outside this service.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db, field.id)
///     .username("alice")
///     .enrollment_year(2023)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
    enrollment_year: i32,
    field_id: i32,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - password: `"hashedpassword"`
    /// - enrollment_year: `2021`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `field_id` - ID of the field the student is enrolled in
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, field_id: i32) -> Self {
        Self {
            db,
            username: format!("user_{}", next_id()),
            password: "hashedpassword".to_string(),
            enrollment_year: 2021,
            field_id,
        }
    }

    /// Sets the username for the student.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash for the student.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the enrollment year for the student.
    pub fn enrollment_year(mut self, enrollment_year: i32) -> Self {
        self.enrollment_year = enrollment_year;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown field)
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now();
        entity::student::ActiveModel {
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(self.password),
            enrollment_year: ActiveValue::Set(self.enrollment_year),
            field_id: ActiveValue::Set(self.field_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given field.
///
/// Shorthand for `StudentFactory::new(db, field_id).build().await`.
pub async fn create_student(
    db: &DatabaseConnection,
    field_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, field_id).build().await
}
