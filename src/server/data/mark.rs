//! Mark data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::mark::{Mark, UpsertMarkOutcome, UpsertMarkParam};

/// Repository providing database operations for marks.
pub struct MarkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarkRepository<'a> {
    /// Creates a new MarkRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the mark of a student in a subject.
    ///
    /// Issues a single `INSERT ... ON CONFLICT (student_id, subject_id) DO UPDATE` and reads
    /// the outcome from the returned row: an insert writes the same timestamp to
    /// `created_at` and `updated_at`, while the conflict update only refreshes `updated_at`.
    /// The unique index on the pair guarantees one row per student and subject.
    ///
    /// # Arguments
    /// - `param` - Student ID, subject ID and score
    ///
    /// # Returns
    /// - `Ok(UpsertMarkOutcome::Created(_))` - No mark existed for the pair
    /// - `Ok(UpsertMarkOutcome::Updated(_))` - The existing mark was overwritten
    /// - `Err(DbErr)` - Database error (e.g. unknown student or subject)
    pub async fn upsert(&self, param: UpsertMarkParam) -> Result<UpsertMarkOutcome, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::Mark::insert(entity::mark::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            subject_id: ActiveValue::Set(param.subject_id),
            marks: ActiveValue::Set(param.marks),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::mark::Column::StudentId,
                entity::mark::Column::SubjectId,
            ])
            .update_columns([entity::mark::Column::Marks, entity::mark::Column::UpdatedAt])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        let created = entity.created_at == entity.updated_at;
        let mark = Mark::from_entity(entity);
        if created {
            Ok(UpsertMarkOutcome::Created(mark))
        } else {
            Ok(UpsertMarkOutcome::Updated(mark))
        }
    }
}
