use super::*;

/// Tests deleting a faction by name.
///
/// Expected: Ok(1) and the faction no longer found
#[tokio::test]
async fn deletes_existing_faction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db).name("Reds").build().await?;
    FactionFactory::new(db).name("Blues").build().await?;

    let repo = FactionRepository::new(db);
    let deleted = repo.delete_by_name("Reds").await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_name("Reds").await?.is_none());
    assert!(repo.find_by_name("Blues").await?.is_some());

    Ok(())
}

/// Tests deleting a faction that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_faction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FactionRepository::new(db);
    let deleted = repo.delete_by_name("Reds").await?;

    assert_eq!(deleted, 0);

    Ok(())
}
