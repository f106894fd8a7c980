use super::*;

/// Tests total marks per student.
///
/// Expected: students with marks only, ordered by field then total descending
#[tokio::test]
async fn sums_marks_per_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed(db).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.student_totals().await?;

    let totals: Vec<(i32, &str, i64)> = rows
        .iter()
        .map(|r| (r.student_id, r.student_name.as_str(), r.total_marks))
        .collect();
    assert_eq!(
        totals,
        vec![
            (seeded.alice, "alice", 140),
            (seeded.bob, "bob", 70),
            (seeded.dave, "dave", 40),
        ]
    );

    Ok(())
}

/// Tests ordering of equal totals within a field.
///
/// Expected: ties ordered by student ID ascending
#[tokio::test]
async fn orders_equal_totals_by_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;
    let subject = factory::subject::create_subject(db, field.id).await?;
    let first = factory::student::create_student(db, field.id).await?;
    let second = factory::student::create_student(db, field.id).await?;
    factory::mark::create_mark_with_score(db, second.id, subject.id, 90).await?;
    factory::mark::create_mark_with_score(db, first.id, subject.id, 90).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.student_totals().await?;

    let ids: Vec<i32> = rows.iter().map(|r| r.student_id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
