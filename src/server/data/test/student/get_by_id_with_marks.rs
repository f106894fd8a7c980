use super::*;

/// Tests fetching a student with marks.
///
/// Expected: Some with the student's marks
#[tokio::test]
async fn returns_student_with_marks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, subject, student, mark) = factory::helpers::create_mark_with_dependencies(db).await?;

    let repo = StudentRepository::new(db);
    let detail = repo.get_by_id_with_marks(student.id).await?.unwrap();

    assert_eq!(detail.username, student.username);
    assert_eq!(detail.marks.len(), 1);
    assert_eq!(detail.marks[0].id, mark.id);
    assert_eq!(detail.marks[0].subject_id, subject.id);

    Ok(())
}

/// Tests that other students' marks are not included.
///
/// Expected: only the requested student's marks
#[tokio::test]
async fn excludes_marks_of_other_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (field, _, _, _) = factory::helpers::create_mark_with_dependencies(db).await?;
    let other = factory::student::create_student(db, field.id).await?;

    let repo = StudentRepository::new(db);
    let detail = repo.get_by_id_with_marks(other.id).await?.unwrap();

    assert_eq!(detail.id, other.id);
    assert!(detail.marks.is_empty());

    Ok(())
}

/// Tests fetching a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(repo.get_by_id_with_marks(42).await?.is_none());

    Ok(())
}
