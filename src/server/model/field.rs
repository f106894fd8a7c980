//! Field of study domain models.

use chrono::{DateTime, Utc};

use crate::model::field::{CreateFieldDto, FieldDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Field {
    pub fn into_dto(self) -> FieldDto {
        FieldDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::field::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a field.
#[derive(Debug, Clone)]
pub struct CreateFieldParam {
    pub name: String,
}

impl CreateFieldParam {
    pub fn from_dto(dto: CreateFieldDto) -> Self {
        Self { name: dto.name }
    }
}
