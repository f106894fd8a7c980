//! Student data repository for database operations.
//!
//! Student reads join the field and every mark of a student into one flat result and fold
//! it back into `StudentDetail` values. Updates and deletes report whether a row matched so
//! the service can answer with not-found.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::student::{
    fold_student_rows, Student, StudentDetail, StudentMarkRow, UpdateStudentParam,
};

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every student with its field and marks.
    ///
    /// Students are ordered by ID and marks by mark ID within each student. Students
    /// without marks are included with an empty mark list.
    ///
    /// # Returns
    /// - `Ok(Vec<StudentDetail>)` - All students
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_marks(&self) -> Result<Vec<StudentDetail>, DbErr> {
        let rows = Self::joined_rows()
            .into_model::<StudentMarkRow>()
            .all(self.db)
            .await?;

        Ok(fold_student_rows(rows))
    }

    /// Gets one student with its field and marks.
    ///
    /// # Arguments
    /// - `student_id` - ID of the student
    ///
    /// # Returns
    /// - `Ok(Some(StudentDetail))` - Student found
    /// - `Ok(None)` - No student with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id_with_marks(
        &self,
        student_id: i32,
    ) -> Result<Option<StudentDetail>, DbErr> {
        let rows = Self::joined_rows()
            .filter(entity::student::Column::Id.eq(student_id))
            .into_model::<StudentMarkRow>()
            .all(self.db)
            .await?;

        Ok(fold_student_rows(rows).into_iter().next())
    }

    /// Finds a student row without relations.
    pub async fn find_by_id(&self, student_id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Replaces a student's username, enrollment year and field.
    ///
    /// Runs a single filtered update. When no row matches nothing is written.
    ///
    /// # Arguments
    /// - `param` - Student ID and the new column values
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student with that ID
    /// - `Err(DbErr)` - Database error during update (e.g. unknown field)
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Option<Student>, DbErr> {
        let result = entity::prelude::Student::update_many()
            .col_expr(entity::student::Column::Username, Expr::value(param.username))
            .col_expr(
                entity::student::Column::EnrollmentYear,
                Expr::value(param.enrollment_year),
            )
            .col_expr(entity::student::Column::FieldId, Expr::value(param.field_id))
            .col_expr(entity::student::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::student::Column::Id.eq(param.id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(param.id).await
    }

    /// Deletes a student by ID. Marks of the student are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Student deleted
    /// - `Ok(false)` - No student with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, student_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(student_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn joined_rows() -> Select<entity::prelude::Student> {
        entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::Id)
            .column(entity::student::Column::Username)
            .column(entity::student::Column::EnrollmentYear)
            .column(entity::student::Column::FieldId)
            .column(entity::student::Column::CreatedAt)
            .column(entity::student::Column::UpdatedAt)
            .column_as(entity::field::Column::Name, "field_name")
            .column_as(entity::mark::Column::Id, "mark_id")
            .column_as(entity::mark::Column::SubjectId, "mark_subject_id")
            .column_as(entity::mark::Column::Marks, "mark_marks")
            .column_as(entity::mark::Column::CreatedAt, "mark_created_at")
            .column_as(entity::mark::Column::UpdatedAt, "mark_updated_at")
            .join(JoinType::LeftJoin, entity::student::Relation::Field.def())
            .join(JoinType::LeftJoin, entity::student::Relation::Mark.def())
            .order_by_asc(entity::student::Column::Id)
            .order_by_asc(entity::mark::Column::Id)
    }
}
