use super::*;
use test_utils::factory::user::UserFactory;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id("123456789")
        .name("TestUser")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(123456789).await?;

    let user = user.expect("user should exist");
    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(987654321).await?;

    assert!(user.is_none());

    Ok(())
}
