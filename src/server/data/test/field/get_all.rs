use super::*;

/// Tests listing fields.
///
/// Expected: all fields ordered by name
#[tokio::test]
async fn lists_fields_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::field::create_field_named(db, "Physics").await?;
    factory::field::create_field_named(db, "Biology").await?;
    factory::field::create_field_named(db, "Mathematics").await?;

    let repo = FieldRepository::new(db);
    let fields = repo.get_all().await?;

    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Biology", "Mathematics", "Physics"]);

    Ok(())
}

/// Tests listing fields on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FieldRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
