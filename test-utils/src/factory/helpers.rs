//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student in a new field, without marks.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((field, student))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_field(
    db: &DatabaseConnection,
) -> Result<(entity::field::Model, entity::student::Model), DbErr> {
    let field = crate::factory::field::create_field(db).await?;
    let student = crate::factory::student::create_student(db, field.id).await?;

    Ok((field, student))
}

/// Creates a complete mark hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Field
/// 2. Subject in that field
/// 3. Student in that field
/// 4. Mark for the student and subject
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((field, subject, student, mark))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mark_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::field::Model,
        entity::subject::Model,
        entity::student::Model,
        entity::mark::Model,
    ),
    DbErr,
> {
    let field = crate::factory::field::create_field(db).await?;
    let subject = crate::factory::subject::create_subject(db, field.id).await?;
    let student = crate::factory::student::create_student(db, field.id).await?;
    let mark = crate::factory::mark::create_mark(db, student.id, subject.id).await?;

    Ok((field, subject, student, mark))
}
