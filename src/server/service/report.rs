//! Aggregate report service.
//!
//! Runs the grouped report queries and reshapes their rows into nested maps keyed by
//! field name and subject name.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::report::ReportRepository,
    error::AppError,
    model::report::{
        AverageTotalMarks, PassRates, StudentCounts, SubjectHighestMarks, TopStudents,
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Average mark per field and per field/subject.
    pub async fn average_total_marks(&self) -> Result<AverageTotalMarks, AppError> {
        let repo = ReportRepository::new(self.db);

        let fields = repo.field_averages().await?;
        let subjects = repo.subject_averages().await?;

        Ok(AverageTotalMarks::from_rows(fields, subjects))
    }

    /// Highest mark per field/subject.
    pub async fn subjects_highest(&self) -> Result<SubjectHighestMarks, AppError> {
        let rows = ReportRepository::new(self.db).subject_highest().await?;

        Ok(SubjectHighestMarks::from_rows(rows))
    }

    /// Student with the highest total per field.
    ///
    /// Ties keep the student listed first by the query, i.e. the lowest student ID.
    pub async fn top_students(&self) -> Result<TopStudents, AppError> {
        let rows = ReportRepository::new(self.db).student_totals().await?;

        Ok(TopStudents::from_rows(rows))
    }

    /// Pass rate percentage per field/subject.
    pub async fn pass_rates(&self) -> Result<PassRates, AppError> {
        let rows = ReportRepository::new(self.db).pass_rates().await?;

        Ok(PassRates::from_rows(rows))
    }

    /// Number of students per field.
    pub async fn student_counts(&self) -> Result<StudentCounts, AppError> {
        let rows = ReportRepository::new(self.db).field_counts().await?;

        Ok(StudentCounts::from_rows(rows))
    }
}
