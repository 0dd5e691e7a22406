use super::*;

/// Tests finding a faction by exact name.
///
/// Expected: Ok(Some(Faction)) with stored values
#[tokio::test]
async fn finds_existing_faction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db)
        .name("Reds")
        .leader("Alice")
        .economy(70)
        .member_count(5)
        .owner("u1")
        .build()
        .await?;

    let repo = FactionRepository::new(db);
    let faction = repo.find_by_name("Reds").await?.expect("faction should exist");

    assert_eq!(faction.name, "Reds");
    assert_eq!(faction.leader.as_deref(), Some("Alice"));
    assert_eq!(faction.economy, 70);
    assert_eq!(faction.members.count, 5);
    assert_eq!(faction.members.user_id, "u1");

    Ok(())
}

/// Tests that lookups are exact rather than prefix or pattern matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db).name("Reds").build().await?;

    let repo = FactionRepository::new(db);

    assert!(repo.find_by_name("Red").await?.is_none());
    assert!(repo.find_by_name("Blues").await?.is_none());

    Ok(())
}
