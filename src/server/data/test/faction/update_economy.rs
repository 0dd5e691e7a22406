use super::*;

/// Tests overwriting the economy of an existing faction.
///
/// Expected: Ok(1) and the new value persisted
#[tokio::test]
async fn overwrites_economy() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db).name("Reds").money(500).build().await?;

    let repo = FactionRepository::new(db);
    let updated = repo.update_economy("Reds", 42).await?;

    assert_eq!(updated, 1);
    let faction = repo.find_by_name("Reds").await?.unwrap();
    assert_eq!(faction.economy, 42);
    assert_eq!(faction.money, 500);

    Ok(())
}

/// Tests that updating an unknown faction is a silent no-op.
///
/// Expected: Ok(0) and other factions untouched
#[tokio::test]
async fn is_noop_for_unknown_faction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db).name("Reds").build().await?;

    let repo = FactionRepository::new(db);
    let updated = repo.update_economy("Blues", 42).await?;

    assert_eq!(updated, 0);
    let faction = repo.find_by_name("Reds").await?.unwrap();
    assert_eq!(faction.economy, DEFAULT_ECONOMY);

    Ok(())
}
