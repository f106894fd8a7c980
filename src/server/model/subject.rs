//! Subject domain models.

use chrono::{DateTime, Utc};

use crate::model::subject::{CreateSubjectDto, SubjectDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: i32,
    pub name: String,
    pub field_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subject {
    pub fn into_dto(self) -> SubjectDto {
        SubjectDto {
            id: self.id,
            name: self.name,
            field_id: self.field_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::subject::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            field_id: entity.field_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a subject within a field.
#[derive(Debug, Clone)]
pub struct CreateSubjectParam {
    pub name: String,
    pub field_id: i32,
}

impl CreateSubjectParam {
    pub fn from_dto(dto: CreateSubjectDto) -> Self {
        Self {
            name: dto.name,
            field_id: dto.field_id,
        }
    }
}

/// Filter for listing subjects.
#[derive(Debug, Clone, Default)]
pub struct GetSubjectsParam {
    /// Restrict the listing to one field.
    pub field_id: Option<i32>,
}
