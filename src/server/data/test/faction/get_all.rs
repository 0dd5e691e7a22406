use super::*;

/// Tests listing factions in insertion order.
///
/// Expected: Ok with factions ordered by ascending ID
#[tokio::test]
async fn returns_factions_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db).name("Reds").build().await?;
    FactionFactory::new(db).name("Blues").build().await?;
    FactionFactory::new(db).name("Greens").build().await?;

    let repo = FactionRepository::new(db);
    let factions = repo.get_all().await?;

    let names: Vec<&str> = factions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Reds", "Blues", "Greens"]);

    Ok(())
}

/// Tests listing an empty store.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_when_no_factions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FactionRepository::new(db);
    let factions = repo.get_all().await?;

    assert!(factions.is_empty());

    Ok(())
}

/// Tests that rows written with the old `[]` roster are listed with an empty roster.
///
/// Expected: Ok with the legacy row normalised
#[tokio::test]
async fn normalises_legacy_rosters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Faction).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    FactionFactory::new(db)
        .name("Old")
        .raw_members(serde_json::json!([]))
        .build()
        .await?;

    let repo = FactionRepository::new(db);
    let factions = repo.get_all().await?;

    assert_eq!(factions.len(), 1);
    assert_eq!(factions[0].members, FactionMembers::default());

    Ok(())
}
