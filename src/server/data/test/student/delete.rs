use super::*;

/// Tests deleting an existing student.
///
/// Expected: Ok(true), student and its marks removed
#[tokio::test]
async fn deletes_student_and_marks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, student, mark) = factory::helpers::create_mark_with_dependencies(db).await?;

    let repo = StudentRepository::new(db);

    assert!(repo.delete(student.id).await?);
    assert!(repo.get_by_id_with_marks(student.id).await?.is_none());
    assert!(entity::prelude::Mark::find_by_id(mark.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
