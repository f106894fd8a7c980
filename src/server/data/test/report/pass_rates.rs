use super::*;

/// Tests pass rate per subject.
///
/// Expected: Algebra 100 (90, 70), Calculus 0 (50), Optics 0 (40)
#[tokio::test]
async fn computes_pass_rate_per_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.pass_rates().await?;

    let rates: Vec<(&str, f64)> = rows
        .iter()
        .map(|r| (r.subject_name.as_str(), r.pass_rate))
        .collect();
    assert_eq!(
        rates,
        vec![("Algebra", 100.0), ("Calculus", 0.0), ("Optics", 0.0)]
    );

    Ok(())
}

/// Tests that a mark equal to the pass mark counts as a pass.
///
/// Expected: one pass out of two gives 50
#[tokio::test]
async fn pass_mark_is_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::create_field(db).await?;
    let subject = factory::subject::create_subject(db, field.id).await?;
    let passing = factory::student::create_student(db, field.id).await?;
    let failing = factory::student::create_student(db, field.id).await?;
    factory::mark::create_mark_with_score(db, passing.id, subject.id, 60).await?;
    factory::mark::create_mark_with_score(db, failing.id, subject.id, 59).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.pass_rates().await?;

    assert_eq!(rows.len(), 1);
    assert!((rows[0].pass_rate - 50.0).abs() < 1e-9);

    Ok(())
}
