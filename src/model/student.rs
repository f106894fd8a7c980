use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{field::FieldSummaryDto, mark::MarkDto};

/// Student row without relations, returned after an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    pub username: String,
    pub enrollment_year: i32,
    pub field_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Student with its field and every mark recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetailDto {
    pub id: i32,
    pub username: String,
    pub enrollment_year: i32,
    pub field_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub field: Option<FieldSummaryDto>,
    pub marks: Vec<MarkDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    pub username: String,
    pub enrollment_year: i32,
    pub field_id: i32,
}
