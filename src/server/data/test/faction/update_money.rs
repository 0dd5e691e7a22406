use super::*;

/// Tests overwriting the money of an existing faction.
///
/// Expected: Ok(1) and the new value persisted, economy untouched
#[tokio::test]
async fn overwrites_money() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db).name("Reds").economy(60).build().await?;

    let repo = FactionRepository::new(db);
    let updated = repo.update_money("Reds", -250).await?;

    assert_eq!(updated, 1);
    let faction = repo.find_by_name("Reds").await?.unwrap();
    assert_eq!(faction.money, -250);
    assert_eq!(faction.economy, 60);

    Ok(())
}

/// Tests that updating an unknown faction is a silent no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn is_noop_for_unknown_faction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FactionRepository::new(db);
    let updated = repo.update_money("Nobody", 5).await?;

    assert_eq!(updated, 0);

    Ok(())
}
