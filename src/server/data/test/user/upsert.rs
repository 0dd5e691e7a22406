use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a new user.
///
/// Expected: Ok with the user stored under its Discord ID
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");

    let stored = entity::prelude::User::find_by_id("123456789".to_string())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a repeated login refreshes the stored name instead of inserting a duplicate.
///
/// Expected: Ok with a single row carrying the latest name
#[tokio::test]
async fn updates_existing_user_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        discord_id: 123456789,
        name: "OldName".to_string(),
    })
    .await?;
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "NewName".to_string(),
        })
        .await?;

    assert_eq!(user.name, "NewName");

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
