use super::*;

/// Tests admin check on an empty table.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin check when only regular users exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin check once an admin exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.admin_exists().await?);

    Ok(())
}
