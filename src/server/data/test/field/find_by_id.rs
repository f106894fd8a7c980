use super::*;

/// Tests finding an existing field and a missing one.
///
/// Expected: Some for the created field, None for an unknown ID
#[tokio::test]
async fn finds_field_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::field::create_field(db).await?;

    let repo = FieldRepository::new(db);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found.map(|f| f.name), Some(created.name));
    assert!(repo.find_by_id(created.id + 100).await?.is_none());

    Ok(())
}
