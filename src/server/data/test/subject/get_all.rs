use super::*;

/// Tests listing all subjects without a filter.
///
/// Expected: subjects from every field ordered by name
#[tokio::test]
async fn lists_all_subjects_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let math = factory::field::create_field(db).await?;
    let physics = factory::field::create_field(db).await?;
    factory::subject::create_subject_named(db, math.id, "Calculus").await?;
    factory::subject::create_subject_named(db, physics.id, "Optics").await?;
    factory::subject::create_subject_named(db, math.id, "Algebra").await?;

    let repo = SubjectRepository::new(db);
    let subjects = repo.get_all(GetSubjectsParam::default()).await?;

    let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Algebra", "Calculus", "Optics"]);

    Ok(())
}

/// Tests filtering subjects by field.
///
/// Expected: only subjects of the requested field
#[tokio::test]
async fn filters_subjects_by_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let math = factory::field::create_field(db).await?;
    let physics = factory::field::create_field(db).await?;
    factory::subject::create_subject(db, math.id).await?;
    factory::subject::create_subject(db, physics.id).await?;
    factory::subject::create_subject(db, physics.id).await?;

    let repo = SubjectRepository::new(db);
    let subjects = repo
        .get_all(GetSubjectsParam {
            field_id: Some(physics.id),
        })
        .await?;

    assert_eq!(subjects.len(), 2);
    assert!(subjects.iter().all(|s| s.field_id == physics.id));

    Ok(())
}
