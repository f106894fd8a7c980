use super::*;

/// Tests updating an existing student.
///
/// Expected: Some with the new username, year and field
#[tokio::test]
async fn updates_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_field(db).await?;
    let new_field = factory::field::create_field(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(UpdateStudentParam {
            id: student.id,
            username: "renamed".to_string(),
            enrollment_year: 2024,
            field_id: new_field.id,
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.enrollment_year, 2024);
    assert_eq!(updated.field_id, new_field.id);
    assert!(updated.updated_at >= student.updated_at);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Ok(None) and no rows changed
#[tokio::test]
async fn returns_none_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (field, student) = factory::helpers::create_student_with_field(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .update(UpdateStudentParam {
            id: student.id + 100,
            username: "ghost".to_string(),
            enrollment_year: 2020,
            field_id: field.id,
        })
        .await?;

    assert!(result.is_none());

    let unchanged = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(unchanged.username, student.username);

    Ok(())
}
