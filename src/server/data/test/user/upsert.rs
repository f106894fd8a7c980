use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository creates a new account with the given username
/// and admin status defaulting to false.
///
/// Expected: Ok with user created and admin status set to false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            username: "registrar".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.username, "registrar");
    assert!(!user.admin);

    Ok(())
}

/// Tests promoting an existing user to admin.
///
/// Expected: Ok with the same user ID and admin status set to true
#[tokio::test]
async fn promotes_existing_user_to_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .username("registrar")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            username: "registrar".to_string(),
            is_admin: Some(true),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert!(user.admin);

    Ok(())
}

/// Tests that upserting without an admin flag preserves admin status.
///
/// Expected: Ok with admin status still true
#[tokio::test]
async fn preserves_admin_when_flag_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("dean")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            username: "dean".to_string(),
            is_admin: None,
        })
        .await?;

    assert!(user.admin);

    Ok(())
}
