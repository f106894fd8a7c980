use super::*;

/// Tests per-field averages.
///
/// Expected: Mathematics averages (90 + 50 + 70) / 3 = 70, Physics 40
#[tokio::test]
async fn averages_marks_per_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.field_averages().await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].field_name, "Mathematics");
    assert!((rows[0].average_marks - 70.0).abs() < f64::EPSILON);
    assert_eq!(rows[1].field_name, "Physics");
    assert!((rows[1].average_marks - 40.0).abs() < f64::EPSILON);

    Ok(())
}

/// Tests per-subject averages.
///
/// Expected: Algebra 80, Calculus 50, Optics 40
#[tokio::test]
async fn averages_marks_per_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.subject_averages().await?;

    let averages: Vec<(&str, &str, f64)> = rows
        .iter()
        .map(|r| (r.field_name.as_str(), r.subject_name.as_str(), r.average_marks))
        .collect();
    assert_eq!(
        averages,
        vec![
            ("Mathematics", "Algebra", 80.0),
            ("Mathematics", "Calculus", 50.0),
            ("Physics", "Optics", 40.0),
        ]
    );

    Ok(())
}

/// Tests highest mark per subject.
///
/// Expected: Algebra 90, Calculus 50, Optics 40
#[tokio::test]
async fn finds_highest_mark_per_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.subject_highest().await?;

    let highest: Vec<(&str, i32)> = rows
        .iter()
        .map(|r| (r.subject_name.as_str(), r.highest_marks))
        .collect();
    assert_eq!(highest, vec![("Algebra", 90), ("Calculus", 50), ("Optics", 40)]);

    Ok(())
}

/// Tests mark reports on an empty database.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_no_rows_without_marks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::create_student_with_field(db).await?;

    let repo = ReportRepository::new(db);

    assert!(repo.field_averages().await?.is_empty());
    assert!(repo.subject_averages().await?.is_empty());
    assert!(repo.subject_highest().await?.is_empty());

    Ok(())
}

/// Tests averages when two fields share a name.
///
/// Expected: Math averages 100 and 0 into 50, for the field and for the subject
#[tokio::test]
async fn averages_across_fields_with_same_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::field::create_field_named(db, "Math").await?;
    let second = factory::field::create_field_named(db, "Math").await?;
    let first_algebra = factory::subject::create_subject_named(db, first.id, "Algebra").await?;
    let second_algebra = factory::subject::create_subject_named(db, second.id, "Algebra").await?;
    let x = factory::student::create_student(db, first.id).await?;
    let y = factory::student::create_student(db, second.id).await?;
    factory::mark::create_mark_with_score(db, x.id, first_algebra.id, 100).await?;
    factory::mark::create_mark_with_score(db, y.id, second_algebra.id, 0).await?;

    let repo = ReportRepository::new(db);

    let fields = repo.field_averages().await?;
    assert_eq!(fields.len(), 1);
    assert!((fields[0].average_marks - 50.0).abs() < f64::EPSILON);

    let subjects = repo.subject_averages().await?;
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].subject_name, "Algebra");
    assert!((subjects[0].average_marks - 50.0).abs() < f64::EPSILON);

    let highest = repo.subject_highest().await?;
    assert_eq!(highest.len(), 1);
    assert_eq!(highest[0].highest_marks, 100);

    Ok(())
}
