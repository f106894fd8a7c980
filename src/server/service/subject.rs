use sea_orm::DatabaseConnection;

use crate::server::{
    data::{field::FieldRepository, subject::SubjectRepository},
    error::AppError,
    model::subject::{CreateSubjectParam, GetSubjectsParam, Subject},
};

pub struct SubjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a subject within an existing field
    ///
    /// Returns `AppError::NotFound` if the field does not exist.
    pub async fn create(&self, param: CreateSubjectParam) -> Result<Subject, AppError> {
        if FieldRepository::new(self.db)
            .find_by_id(param.field_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Field not found".to_string()));
        }

        Ok(SubjectRepository::new(self.db).create(param).await?)
    }

    /// Gets subjects ordered by name, optionally for a single field
    pub async fn get_all(&self, param: GetSubjectsParam) -> Result<Vec<Subject>, AppError> {
        Ok(SubjectRepository::new(self.db).get_all(param).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Subject>, AppError> {
        Ok(SubjectRepository::new(self.db).find_by_id(id).await?)
    }
}
