//! Student service.
//!
//! Wraps the student repository with the not-found decisions the API needs. Updates check
//! that the target field exists so a bad field ID is reported instead of failing on the
//! foreign key.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{field::FieldRepository, student::StudentRepository},
    error::AppError,
    model::student::{Student, StudentDetail, UpdateStudentParam},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all students with their field and marks.
    pub async fn get_all(&self) -> Result<Vec<StudentDetail>, AppError> {
        Ok(StudentRepository::new(self.db).get_all_with_marks().await?)
    }

    /// Gets one student with its field and marks.
    ///
    /// # Returns
    /// - `Ok(Some(StudentDetail))` - Student found
    /// - `Ok(None)` - No student with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<StudentDetail>, AppError> {
        Ok(StudentRepository::new(self.db)
            .get_by_id_with_marks(id)
            .await?)
    }

    /// Replaces a student's username, enrollment year and field.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student with that ID; nothing was written
    /// - `Err(AppError::NotFound)` - The requested field does not exist
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.find_by_id(param.id).await?.is_none() {
            return Ok(None);
        }

        if FieldRepository::new(self.db)
            .find_by_id(param.field_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Field not found".to_string()));
        }

        Ok(repo.update(param).await?)
    }

    /// Deletes a student and, by cascade, its marks.
    ///
    /// Returns false if the student doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(StudentRepository::new(self.db).delete(id).await?)
    }
}
