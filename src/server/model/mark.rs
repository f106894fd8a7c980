//! Mark domain models and upsert parameters.

use chrono::{DateTime, Utc};

use crate::model::mark::{MarkDto, UpsertMarkDto};

/// A student's score for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub marks: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Mark {
    pub fn into_dto(self) -> MarkDto {
        MarkDto {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            marks: self.marks,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::mark::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            subject_id: entity.subject_id,
            marks: entity.marks,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating or replacing the mark of a student in a subject.
#[derive(Debug, Clone)]
pub struct UpsertMarkParam {
    pub student_id: i32,
    pub subject_id: i32,
    pub marks: i32,
}

impl UpsertMarkParam {
    pub fn from_dto(dto: UpsertMarkDto) -> Self {
        Self {
            student_id: dto.student_id,
            subject_id: dto.subject_id,
            marks: dto.marks,
        }
    }
}

/// Outcome of a mark upsert.
///
/// The controller maps `Created` to 201 and `Updated` to 200.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertMarkOutcome {
    Created(Mark),
    Updated(Mark),
}

impl UpsertMarkOutcome {
    /// Returns the stored mark regardless of whether it was created or updated.
    pub fn mark(&self) -> &Mark {
        match self {
            Self::Created(mark) | Self::Updated(mark) => mark,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
