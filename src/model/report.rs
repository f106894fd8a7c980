use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AverageTotalMarksDto {
    /// Average mark per field.
    pub field_wise_average_total_marks: BTreeMap<String, f64>,
    /// Average mark per subject, keyed by field then subject.
    pub subject_wise_average_total_marks: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Highest mark per subject, keyed by field then subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct SubjectHighestMarksDto(pub BTreeMap<String, BTreeMap<String, i32>>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopStudentDto {
    pub student_id: i32,
    pub student_name: String,
    pub total_marks: i64,
}

/// Best student per field, keyed by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TopStudentsDto(pub BTreeMap<String, TopStudentDto>);

/// Pass rate percentage per subject, keyed by field then subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PassRatesDto(pub BTreeMap<String, BTreeMap<String, f64>>);

/// Number of students per field, keyed by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct StudentCountsDto(pub BTreeMap<String, i64>);
