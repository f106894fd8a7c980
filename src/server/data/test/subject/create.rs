use super::*;

/// Tests creating a subject in an existing field.
///
/// Expected: Ok with name and field ID set
#[tokio::test]
async fn creates_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;

    let repo = SubjectRepository::new(db);
    let subject = repo
        .create(CreateSubjectParam {
            name: "Algorithms".to_string(),
            field_id: field.id,
        })
        .await?;

    assert_eq!(subject.name, "Algorithms");
    assert_eq!(subject.field_id, field.id);

    Ok(())
}

/// Tests creating a subject in a field that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubjectRepository::new(db);
    let result = repo
        .create(CreateSubjectParam {
            name: "Algorithms".to_string(),
            field_id: 999,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
