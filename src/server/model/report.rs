//! Aggregate report rows and reshaped report models.
//!
//! Report queries return flat grouped rows. The functions here nest them into maps keyed
//! by field name and then subject name, ordered by key.

use std::collections::BTreeMap;

use sea_orm::FromQueryResult;

use crate::model::report::{
    AverageTotalMarksDto, PassRatesDto, StudentCountsDto, SubjectHighestMarksDto,
    TopStudentDto, TopStudentsDto,
};

/// Minimum mark counted as a pass.
pub const PASS_MARK: i32 = 60;

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct FieldAverageRow {
    pub field_name: String,
    pub average_marks: f64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SubjectAverageRow {
    pub field_name: String,
    pub subject_name: String,
    pub average_marks: f64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SubjectHighestRow {
    pub field_name: String,
    pub subject_name: String,
    pub highest_marks: i32,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct StudentTotalRow {
    pub field_name: String,
    pub student_id: i32,
    pub student_name: String,
    pub total_marks: i64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct PassRateRow {
    pub field_name: String,
    pub subject_name: String,
    pub pass_rate: f64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct FieldCountRow {
    pub field_name: String,
    pub student_count: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AverageTotalMarks {
    pub by_field: BTreeMap<String, f64>,
    pub by_subject: BTreeMap<String, BTreeMap<String, f64>>,
}

impl AverageTotalMarks {
    pub fn from_rows(fields: Vec<FieldAverageRow>, subjects: Vec<SubjectAverageRow>) -> Self {
        let by_field = fields
            .into_iter()
            .map(|row| (row.field_name, row.average_marks))
            .collect();
        let by_subject = nest(
            subjects
                .into_iter()
                .map(|row| (row.field_name, row.subject_name, row.average_marks)),
        );

        Self {
            by_field,
            by_subject,
        }
    }

    pub fn into_dto(self) -> AverageTotalMarksDto {
        AverageTotalMarksDto {
            field_wise_average_total_marks: self.by_field,
            subject_wise_average_total_marks: self.by_subject,
        }
    }
}

/// Highest mark per field and subject.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectHighestMarks(pub BTreeMap<String, BTreeMap<String, i32>>);

impl SubjectHighestMarks {
    pub fn from_rows(rows: Vec<SubjectHighestRow>) -> Self {
        Self(nest(rows.into_iter().map(|row| {
            (row.field_name, row.subject_name, row.highest_marks)
        })))
    }

    pub fn into_dto(self) -> SubjectHighestMarksDto {
        SubjectHighestMarksDto(self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopStudent {
    pub student_id: i32,
    pub student_name: String,
    pub total_marks: i64,
}

/// Best student per field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopStudents(pub BTreeMap<String, TopStudent>);

impl TopStudents {
    /// Keeps the highest total per field.
    ///
    /// A later row replaces the current best only with a strictly greater total, so on a
    /// tie the row seen first wins.
    pub fn from_rows(rows: Vec<StudentTotalRow>) -> Self {
        let mut best: BTreeMap<String, TopStudent> = BTreeMap::new();

        for row in rows {
            let candidate = TopStudent {
                student_id: row.student_id,
                student_name: row.student_name,
                total_marks: row.total_marks,
            };

            match best.get_mut(&row.field_name) {
                Some(current) => {
                    if candidate.total_marks > current.total_marks {
                        *current = candidate;
                    }
                }
                None => {
                    best.insert(row.field_name, candidate);
                }
            }
        }

        Self(best)
    }

    pub fn into_dto(self) -> TopStudentsDto {
        TopStudentsDto(
            self.0
                .into_iter()
                .map(|(field, student)| {
                    (
                        field,
                        TopStudentDto {
                            student_id: student.student_id,
                            student_name: student.student_name,
                            total_marks: student.total_marks,
                        },
                    )
                })
                .collect(),
        )
    }
}

/// Pass rate percentage per field and subject.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PassRates(pub BTreeMap<String, BTreeMap<String, f64>>);

impl PassRates {
    pub fn from_rows(rows: Vec<PassRateRow>) -> Self {
        Self(nest(
            rows.into_iter()
                .map(|row| (row.field_name, row.subject_name, row.pass_rate)),
        ))
    }

    pub fn into_dto(self) -> PassRatesDto {
        PassRatesDto(self.0)
    }
}

/// Number of students per field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentCounts(pub BTreeMap<String, i64>);

impl StudentCounts {
    pub fn from_rows(rows: Vec<FieldCountRow>) -> Self {
        Self(
            rows.into_iter()
                .map(|row| (row.field_name, row.student_count))
                .collect(),
        )
    }

    pub fn into_dto(self) -> StudentCountsDto {
        StudentCountsDto(self.0)
    }
}

fn nest<V>(
    rows: impl IntoIterator<Item = (String, String, V)>,
) -> BTreeMap<String, BTreeMap<String, V>> {
    let mut nested: BTreeMap<String, BTreeMap<String, V>> = BTreeMap::new();

    for (field, subject, value) in rows {
        nested.entry(field).or_default().insert(subject, value);
    }

    nested
}
