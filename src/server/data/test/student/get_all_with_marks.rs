use super::*;

/// Tests listing students when none exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(repo.get_all_with_marks().await?.is_empty());

    Ok(())
}

/// Tests that a student without marks is listed with an empty mark list.
///
/// Expected: one student with field summary and no marks
#[tokio::test]
async fn lists_student_without_marks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (field, student) = factory::helpers::create_student_with_field(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all_with_marks().await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, student.id);
    assert!(students[0].marks.is_empty());
    let summary = students[0].field.as_ref().unwrap();
    assert_eq!(summary.id, field.id);
    assert_eq!(summary.name, field.name);

    Ok(())
}

/// Tests that every mark of a student is folded into its detail.
///
/// Expected: one entry per student, each with exactly its own marks
#[tokio::test]
async fn folds_marks_per_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;
    let algebra = factory::subject::create_subject(db, field.id).await?;
    let calculus = factory::subject::create_subject(db, field.id).await?;
    let geometry = factory::subject::create_subject(db, field.id).await?;
    let alice = factory::student::create_student(db, field.id).await?;
    let bob = factory::student::create_student(db, field.id).await?;

    factory::mark::create_mark_with_score(db, alice.id, algebra.id, 81).await?;
    factory::mark::create_mark_with_score(db, bob.id, algebra.id, 45).await?;
    factory::mark::create_mark_with_score(db, alice.id, calculus.id, 67).await?;
    factory::mark::create_mark_with_score(db, alice.id, geometry.id, 93).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all_with_marks().await?;

    assert_eq!(students.len(), 2);

    let alice_detail = students.iter().find(|s| s.id == alice.id).unwrap();
    let scores: Vec<(i32, i32)> = alice_detail
        .marks
        .iter()
        .map(|m| (m.subject_id, m.marks))
        .collect();
    assert_eq!(
        scores,
        vec![(algebra.id, 81), (calculus.id, 67), (geometry.id, 93)]
    );

    let bob_detail = students.iter().find(|s| s.id == bob.id).unwrap();
    assert_eq!(bob_detail.marks.len(), 1);
    assert_eq!(bob_detail.marks[0].marks, 45);

    Ok(())
}
