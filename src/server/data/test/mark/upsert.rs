use super::*;

/// Tests the first upsert for a student and subject.
///
/// Expected: Created outcome with one stored row
#[tokio::test]
async fn creates_mark_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;
    let subject = factory::subject::create_subject(db, field.id).await?;
    let student = factory::student::create_student(db, field.id).await?;

    let repo = MarkRepository::new(db);
    let outcome = repo
        .upsert(UpsertMarkParam {
            student_id: student.id,
            subject_id: subject.id,
            marks: 72,
        })
        .await?;

    assert!(outcome.is_created());
    assert_eq!(outcome.mark().marks, 72);
    assert_eq!(entity::prelude::Mark::find().count(db).await?, 1);

    Ok(())
}

/// Tests upserting a pair that already has a mark.
///
/// Expected: Updated outcome, same row ID, new score, still one row for the pair
#[tokio::test]
async fn updates_existing_mark() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, subject, student, existing) =
        factory::helpers::create_mark_with_dependencies(db).await?;

    let repo = MarkRepository::new(db);
    let outcome = repo
        .upsert(UpsertMarkParam {
            student_id: student.id,
            subject_id: subject.id,
            marks: 38,
        })
        .await?;

    match outcome {
        UpsertMarkOutcome::Updated(mark) => {
            assert_eq!(mark.id, existing.id);
            assert_eq!(mark.marks, 38);
            assert_eq!(mark.created_at, existing.created_at);
        }
        UpsertMarkOutcome::Created(_) => panic!("expected an update"),
    }

    let rows = entity::prelude::Mark::find()
        .filter(entity::mark::Column::StudentId.eq(student.id))
        .filter(entity::mark::Column::SubjectId.eq(subject.id))
        .count(db)
        .await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests repeated upserts for one pair.
///
/// Expected: first Created, then Updated, exactly one row holding the last score
#[tokio::test]
async fn repeated_upserts_keep_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;
    let subject = factory::subject::create_subject(db, field.id).await?;
    let student = factory::student::create_student(db, field.id).await?;

    let repo = MarkRepository::new(db);
    let mut outcomes = Vec::new();
    for marks in [10, 20, 30] {
        outcomes.push(
            repo.upsert(UpsertMarkParam {
                student_id: student.id,
                subject_id: subject.id,
                marks,
            })
            .await?,
        );
    }

    assert!(outcomes[0].is_created());
    assert!(!outcomes[1].is_created());
    assert!(!outcomes[2].is_created());

    let stored = entity::prelude::Mark::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].marks, 30);

    Ok(())
}

/// Tests that marks for different subjects of one student are kept apart.
///
/// Expected: two rows, both Created
#[tokio::test]
async fn different_subjects_create_separate_marks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;
    let first = factory::subject::create_subject(db, field.id).await?;
    let second = factory::subject::create_subject(db, field.id).await?;
    let student = factory::student::create_student(db, field.id).await?;

    let repo = MarkRepository::new(db);
    for subject_id in [first.id, second.id] {
        let outcome = repo
            .upsert(UpsertMarkParam {
                student_id: student.id,
                subject_id,
                marks: 64,
            })
            .await?;
        assert!(outcome.is_created());
    }

    assert_eq!(entity::prelude::Mark::find().count(db).await?, 2);

    Ok(())
}

/// Tests upserting a mark for a student that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;
    let subject = factory::subject::create_subject(db, field.id).await?;

    let repo = MarkRepository::new(db);
    let result = repo
        .upsert(UpsertMarkParam {
            student_id: 999,
            subject_id: subject.id,
            marks: 50,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests two first-time upserts for the same pair issued together.
///
/// Expected: both succeed, exactly one reports Created, one row remains
#[tokio::test]
async fn concurrent_first_upserts_both_succeed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;
    let subject = factory::subject::create_subject(db, field.id).await?;
    let student = factory::student::create_student(db, field.id).await?;

    let repo = MarkRepository::new(db);
    let param = |marks| UpsertMarkParam {
        student_id: student.id,
        subject_id: subject.id,
        marks,
    };
    let (first, second) = tokio::join!(repo.upsert(param(40)), repo.upsert(param(80)));
    let (first, second) = (first?, second?);

    assert_eq!(
        [first.is_created(), second.is_created()]
            .iter()
            .filter(|created| **created)
            .count(),
        1
    );
    assert_eq!(entity::prelude::Mark::find().count(db).await?, 1);

    Ok(())
}
