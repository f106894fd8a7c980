//! Subject repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::subject::{CreateSubjectParam, GetSubjectsParam, Subject};

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new subject.
    ///
    /// # Returns
    /// - `Ok(Subject)` - The created subject
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown field)
    pub async fn create(&self, param: CreateSubjectParam) -> Result<Subject, DbErr> {
        let now = Utc::now();
        let entity = entity::subject::ActiveModel {
            name: ActiveValue::Set(param.name),
            field_id: ActiveValue::Set(param.field_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subject::from_entity(entity))
    }

    /// Gets subjects ordered by name, optionally restricted to one field.
    pub async fn get_all(&self, param: GetSubjectsParam) -> Result<Vec<Subject>, DbErr> {
        let mut query = entity::prelude::Subject::find();

        if let Some(field_id) = param.field_id {
            query = query.filter(entity::subject::Column::FieldId.eq(field_id));
        }

        let entities = query
            .order_by_asc(entity::subject::Column::Name)
            .order_by_asc(entity::subject::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Subject::from_entity).collect())
    }

    pub async fn find_by_id(&self, subject_id: i32) -> Result<Option<Subject>, DbErr> {
        let entity = entity::prelude::Subject::find_by_id(subject_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Subject::from_entity))
    }
}
