use super::*;

/// Tests creating a field.
///
/// Expected: Ok with the given name and matching timestamps
#[tokio::test]
async fn creates_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FieldRepository::new(db);
    let field = repo
        .create(CreateFieldParam {
            name: "Computer Science".to_string(),
        })
        .await?;

    assert_eq!(field.name, "Computer Science");
    assert_eq!(field.created_at, field.updated_at);

    Ok(())
}
