//! Mark factory for creating test mark entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test marks for a student and subject.
///
/// # Example
///
/// ```rust,ignore
/// let mark = MarkFactory::new(&db, student.id, subject.id).marks(87).build().await?;
/// ```
pub struct MarkFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    subject_id: i32,
    marks: i32,
}

impl<'a> MarkFactory<'a> {
    /// Creates a new MarkFactory with default values.
    ///
    /// Defaults:
    /// - marks: `75`
    pub fn new(db: &'a DatabaseConnection, student_id: i32, subject_id: i32) -> Self {
        Self {
            db,
            student_id,
            subject_id,
            marks: 75,
        }
    }

    /// Sets the score for the mark.
    pub fn marks(mut self, marks: i32) -> Self {
        self.marks = marks;
        self
    }

    /// Builds and inserts the mark entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mark::Model)` - Created mark entity
    /// - `Err(DbErr)` - Database error during insert (unknown student/subject or a
    ///   duplicate student/subject pair)
    pub async fn build(self) -> Result<entity::mark::Model, DbErr> {
        let now = Utc::now();
        entity::mark::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            subject_id: ActiveValue::Set(self.subject_id),
            marks: ActiveValue::Set(self.marks),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mark with the default score.
pub async fn create_mark(
    db: &DatabaseConnection,
    student_id: i32,
    subject_id: i32,
) -> Result<entity::mark::Model, DbErr> {
    MarkFactory::new(db, student_id, subject_id).build().await
}

/// Creates a mark with a specific score.
pub async fn create_mark_with_score(
    db: &DatabaseConnection,
    student_id: i32,
    subject_id: i32,
    marks: i32,
) -> Result<entity::mark::Model, DbErr> {
    MarkFactory::new(db, student_id, subject_id)
        .marks(marks)
        .build()
        .await
}
