use sea_orm::DatabaseConnection;

use crate::server::{
    data::{mark::MarkRepository, student::StudentRepository, subject::SubjectRepository},
    error::AppError,
    model::mark::{UpsertMarkOutcome, UpsertMarkParam},
};

pub struct MarkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the mark of a student in a subject.
    ///
    /// Returns `AppError::NotFound` when the student or the subject does not exist.
    pub async fn upsert(&self, param: UpsertMarkParam) -> Result<UpsertMarkOutcome, AppError> {
        if StudentRepository::new(self.db)
            .find_by_id(param.student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        if SubjectRepository::new(self.db)
            .find_by_id(param.subject_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Subject not found".to_string()));
        }

        let outcome = MarkRepository::new(self.db).upsert(param).await?;

        Ok(outcome)
    }
}
