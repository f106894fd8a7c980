//! Aggregate report queries.
//!
//! Each report is a grouped SQL statement over the student, field, mark and subject tables.
//! Only students with a field and, for mark reports, at least one mark contribute, so all
//! joins are inner joins. Groups are keyed by field and subject name, so rows with the same
//! name are merged into one group.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement};

use crate::server::model::report::{
    FieldAverageRow, FieldCountRow, PassRateRow, StudentTotalRow, SubjectAverageRow,
    SubjectHighestRow, PASS_MARK,
};

const FIELD_AVERAGES: &str = "\
SELECT f.name AS field_name, CAST(AVG(m.marks) AS REAL) AS average_marks
FROM student s
JOIN field f ON s.field_id = f.id
JOIN mark m ON s.id = m.student_id
GROUP BY f.name
ORDER BY f.name";

const SUBJECT_AVERAGES: &str = "\
SELECT f.name AS field_name, sub.name AS subject_name, CAST(AVG(m.marks) AS REAL) AS average_marks
FROM student s
JOIN field f ON s.field_id = f.id
JOIN mark m ON s.id = m.student_id
JOIN subject sub ON m.subject_id = sub.id
GROUP BY f.name, sub.name
ORDER BY f.name, sub.name";

const SUBJECT_HIGHEST: &str = "\
SELECT f.name AS field_name, sub.name AS subject_name, MAX(m.marks) AS highest_marks
FROM student s
JOIN field f ON s.field_id = f.id
JOIN mark m ON s.id = m.student_id
JOIN subject sub ON m.subject_id = sub.id
GROUP BY f.name, sub.name
ORDER BY f.name, sub.name";

const STUDENT_TOTALS: &str = "\
SELECT f.name AS field_name, s.id AS student_id, s.username AS student_name, SUM(m.marks) AS total_marks
FROM student s
JOIN field f ON s.field_id = f.id
JOIN mark m ON s.id = m.student_id
GROUP BY f.name, s.id, s.username
ORDER BY f.name, total_marks DESC, s.id";

const FIELD_COUNTS: &str = "\
SELECT f.name AS field_name, COUNT(s.id) AS student_count
FROM student s
JOIN field f ON s.field_id = f.id
GROUP BY f.name
ORDER BY f.name";

/// Repository running the grouped report queries.
pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Average mark per field.
    pub async fn field_averages(&self) -> Result<Vec<FieldAverageRow>, DbErr> {
        self.query(FIELD_AVERAGES.to_string()).await
    }

    /// Average mark per field and subject.
    pub async fn subject_averages(&self) -> Result<Vec<SubjectAverageRow>, DbErr> {
        self.query(SUBJECT_AVERAGES.to_string()).await
    }

    /// Highest mark per field and subject.
    pub async fn subject_highest(&self) -> Result<Vec<SubjectHighestRow>, DbErr> {
        self.query(SUBJECT_HIGHEST.to_string()).await
    }

    /// Total marks per student, ordered by field name, total descending, then student ID.
    pub async fn student_totals(&self) -> Result<Vec<StudentTotalRow>, DbErr> {
        self.query(STUDENT_TOTALS.to_string()).await
    }

    /// Percentage of marks at or above `PASS_MARK` per field and subject.
    pub async fn pass_rates(&self) -> Result<Vec<PassRateRow>, DbErr> {
        let sql = format!(
            "\
SELECT f.name AS field_name, sub.name AS subject_name,
    AVG(CASE WHEN m.marks >= {PASS_MARK} THEN 1.0 ELSE 0.0 END) * 100 AS pass_rate
FROM student s
JOIN field f ON s.field_id = f.id
JOIN mark m ON s.id = m.student_id
JOIN subject sub ON m.subject_id = sub.id
GROUP BY f.name, sub.name
ORDER BY f.name, sub.name"
        );

        self.query(sql).await
    }

    /// Number of students per field.
    pub async fn field_counts(&self) -> Result<Vec<FieldCountRow>, DbErr> {
        self.query(FIELD_COUNTS.to_string()).await
    }

    async fn query<T: FromQueryResult>(&self, sql: String) -> Result<Vec<T>, DbErr> {
        let stmt = Statement::from_string(self.db.get_database_backend(), sql);

        T::find_by_statement(stmt).all(self.db).await
    }
}
