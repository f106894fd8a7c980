use sea_orm::DatabaseConnection;

use crate::server::{
    data::field::FieldRepository,
    error::AppError,
    model::field::{CreateFieldParam, Field},
};

pub struct FieldService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FieldService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new field of study
    pub async fn create(&self, param: CreateFieldParam) -> Result<Field, AppError> {
        let field = FieldRepository::new(self.db).create(param).await?;

        Ok(field)
    }

    /// Gets all fields ordered by name
    pub async fn get_all(&self) -> Result<Vec<Field>, AppError> {
        Ok(FieldRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Field>, AppError> {
        Ok(FieldRepository::new(self.db).find_by_id(id).await?)
    }
}
