//! Student domain models and the student listing fold.
//!
//! Student listings are read as one flat joined result (a row per student/mark pair) and
//! folded back into one `StudentDetail` per student with `fold_student_rows`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;

use crate::model::{
    field::FieldSummaryDto,
    student::{StudentDetailDto, StudentDto, UpdateStudentDto},
};
use crate::server::model::mark::Mark;

/// Student without relations.
///
/// The stored password hash never leaves the repository layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub username: String,
    pub enrollment_year: i32,
    pub field_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            username: self.username,
            enrollment_year: self.enrollment_year,
            field_id: self.field_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            enrollment_year: entity.enrollment_year,
            field_id: entity.field_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Id and name of the field a student is enrolled in.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub id: i32,
    pub name: String,
}

impl FieldSummary {
    pub fn into_dto(self) -> FieldSummaryDto {
        FieldSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Student with its field and all recorded marks.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDetail {
    pub id: i32,
    pub username: String,
    pub enrollment_year: i32,
    pub field_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub field: Option<FieldSummary>,
    pub marks: Vec<Mark>,
}

impl StudentDetail {
    pub fn into_dto(self) -> StudentDetailDto {
        StudentDetailDto {
            id: self.id,
            username: self.username,
            enrollment_year: self.enrollment_year,
            field_id: self.field_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            field: self.field.map(FieldSummary::into_dto),
            marks: self.marks.into_iter().map(Mark::into_dto).collect(),
        }
    }
}

/// One row of the student/field/mark left join.
///
/// Field and mark columns are optional since a student may have no marks and the join
/// is outer on both sides.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct StudentMarkRow {
    pub id: i32,
    pub username: String,
    pub enrollment_year: i32,
    pub field_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub field_name: Option<String>,
    pub mark_id: Option<i32>,
    pub mark_subject_id: Option<i32>,
    pub mark_marks: Option<i32>,
    pub mark_created_at: Option<DateTime<Utc>>,
    pub mark_updated_at: Option<DateTime<Utc>>,
}

impl StudentMarkRow {
    fn mark(&self) -> Option<Mark> {
        Some(Mark {
            id: self.mark_id?,
            student_id: self.id,
            subject_id: self.mark_subject_id?,
            marks: self.mark_marks?,
            created_at: self.mark_created_at?,
            updated_at: self.mark_updated_at?,
        })
    }

    fn into_detail(self) -> StudentDetail {
        let field = self.field_name.clone().map(|name| FieldSummary {
            id: self.field_id,
            name,
        });
        let marks = self.mark().into_iter().collect();

        StudentDetail {
            id: self.id,
            username: self.username,
            enrollment_year: self.enrollment_year,
            field_id: self.field_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            field,
            marks,
        }
    }
}

/// Groups joined student/mark rows into one detail per student.
///
/// Students keep the order in which they first appear in `rows`, and marks keep their row
/// order within each student. Rows are grouped by student id, so the input does not need to
/// be sorted. A row without a mark contributes the student only.
pub fn fold_student_rows(rows: Vec<StudentMarkRow>) -> Vec<StudentDetail> {
    let mut students: Vec<StudentDetail> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        match index.get(&row.id) {
            Some(&position) => {
                if let Some(mark) = row.mark() {
                    students[position].marks.push(mark);
                }
            }
            None => {
                index.insert(row.id, students.len());
                students.push(row.into_detail());
            }
        }
    }

    students
}

/// Parameters for replacing a student's editable columns.
#[derive(Debug, Clone)]
pub struct UpdateStudentParam {
    pub id: i32,
    pub username: String,
    pub enrollment_year: i32,
    pub field_id: i32,
}

impl UpdateStudentParam {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            username: dto.username,
            enrollment_year: dto.enrollment_year,
            field_id: dto.field_id,
        }
    }
}
