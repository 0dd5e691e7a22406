use super::*;
use sea_orm::EntityTrait;
use sea_orm::SqlErr;

/// Tests creating a faction with the default economy and money.
///
/// Expected: Ok with defaults applied and the canonical roster stored
#[tokio::test]
async fn creates_faction_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FactionRepository::new(db);
    let faction = repo
        .create(
            "Reds".to_string(),
            "Alice".to_string(),
            FactionMembers {
                count: 5,
                user_id: "u1".to_string(),
            },
        )
        .await?;

    assert_eq!(faction.name, "Reds");
    assert_eq!(faction.economy, DEFAULT_ECONOMY);
    assert_eq!(faction.money, DEFAULT_MONEY);

    let stored = entity::prelude::Faction::find_by_id(faction.id)
        .one(db)
        .await?
        .expect("faction should be stored");
    assert_eq!(
        stored.members,
        serde_json::json!({ "count": 5, "userId": "u1" })
    );

    Ok(())
}

/// Tests that the unique index rejects a second faction with the same name.
///
/// Expected: Err(AppError::DbErr) reporting a unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db).name("Reds").build().await?;

    let repo = FactionRepository::new(db);
    let result = repo
        .create(
            "Reds".to_string(),
            "Bob".to_string(),
            FactionMembers::default(),
        )
        .await;

    match result {
        Err(AppError::DbErr(err)) => assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        )),
        other => panic!("expected unique violation, got {:?}", other),
    }

    Ok(())
}
