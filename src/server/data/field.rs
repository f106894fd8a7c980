//! Field of study repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::field::{CreateFieldParam, Field};

pub struct FieldRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FieldRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new field.
    ///
    /// # Returns
    /// - `Ok(Field)` - The created field
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFieldParam) -> Result<Field, DbErr> {
        let now = Utc::now();
        let entity = entity::field::ActiveModel {
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Field::from_entity(entity))
    }

    /// Gets all fields ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Field>, DbErr> {
        let entities = entity::prelude::Field::find()
            .order_by_asc(entity::field::Column::Name)
            .order_by_asc(entity::field::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Field::from_entity).collect())
    }

    pub async fn find_by_id(&self, field_id: i32) -> Result<Option<Field>, DbErr> {
        let entity = entity::prelude::Field::find_by_id(field_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Field::from_entity))
    }
}
