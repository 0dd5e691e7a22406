use super::*;

/// Tests storing a computed economy value by ID.
///
/// Expected: Ok with the returned faction reflecting the new value
#[tokio::test]
async fn stores_economy_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = FactionFactory::new(db)
        .name("Reds")
        .leader("Alice")
        .build()
        .await?;

    let repo = FactionRepository::new(db);
    let faction = repo.set_economy(entity.id, 90).await?;

    assert_eq!(faction.economy, 90);
    assert_eq!(faction.name, "Reds");
    assert_eq!(faction.leader.as_deref(), Some("Alice"));

    Ok(())
}
