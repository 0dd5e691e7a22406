//! Faction service for business logic.
//!
//! `FactionService` is the faction store shared by the web dashboard and the chat commands.
//! It validates input, enforces name uniqueness and turns missing rows into
//! `FactionError::NotFound`, so both control surfaces report failures identically.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::faction::FactionRepository,
    error::{faction::FactionError, AppError},
    model::faction::{CreateFactionParam, Faction, FactionMembers},
};

/// Faction store shared by the dashboard, the chat commands and the announcer.
///
/// Factions are addressed by name. Validation and conflict detection live here so that both
/// surfaces report the same errors.
pub struct FactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionService<'a> {
    /// Creates a new FactionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every faction in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Faction>, AppError> {
        FactionRepository::new(self.db).get_all().await
    }

    /// Looks up a faction by its exact name.
    ///
    /// # Returns
    /// - `Ok(Some(Faction))` - Faction found
    /// - `Ok(None)` - No faction with this name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Faction>, AppError> {
        FactionRepository::new(self.db).find_by_name(name).await
    }

    /// Creates a faction with the default economy and money.
    ///
    /// # Returns
    /// - `Ok(Faction)` - The created faction
    /// - `Err(FactionError::InvalidInput)` - Blank name or leader, or a negative member count
    /// - `Err(FactionError::Conflict)` - A faction with this name already exists
    /// - `Err(AppError)` - Any other database failure
    pub async fn create(&self, param: CreateFactionParam) -> Result<Faction, AppError> {
        let name = param.name.trim().to_string();
        let leader = param.leader.trim().to_string();

        if name.is_empty() {
            return Err(FactionError::InvalidInput("Faction name is required.".to_string()).into());
        }
        if leader.is_empty() {
            return Err(FactionError::InvalidInput("Leader is required.".to_string()).into());
        }
        let count = u32::try_from(param.member_count).map_err(|_| {
            FactionError::InvalidInput("Member count must be a non-negative integer.".to_string())
        })?;

        let repo = FactionRepository::new(self.db);
        if repo.find_by_name(&name).await?.is_some() {
            return Err(FactionError::Conflict(name).into());
        }

        let members = FactionMembers {
            count,
            user_id: param.owner_user_id,
        };

        match repo.create(name.clone(), leader, members).await {
            Ok(faction) => {
                tracing::info!("Created faction {}", faction.name);
                Ok(faction)
            }
            // Lost a race with a concurrent create of the same name.
            Err(AppError::DbErr(err))
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                Err(FactionError::Conflict(name).into())
            }
            Err(err) => Err(err),
        }
    }

    /// Overwrites a faction's economy. Unknown names are ignored.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of factions updated
    pub async fn update_economy(&self, name: &str, economy: i32) -> Result<u64, AppError> {
        let updated = FactionRepository::new(self.db)
            .update_economy(name, economy)
            .await?;

        if updated == 0 {
            tracing::debug!("Economy update for unknown faction {} ignored", name);
        }

        Ok(updated)
    }

    /// Overwrites a faction's money. Unknown names are ignored.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of factions updated
    pub async fn update_money(&self, name: &str, money: i32) -> Result<u64, AppError> {
        let updated = FactionRepository::new(self.db)
            .update_money(name, money)
            .await?;

        if updated == 0 {
            tracing::debug!("Money update for unknown faction {} ignored", name);
        }

        Ok(updated)
    }

    /// Shifts a faction's economy by `delta` and returns the updated faction.
    ///
    /// # Returns
    /// - `Ok(Faction)` - Faction with the new economy
    /// - `Err(FactionError::NotFound)` - No faction with this name
    /// - `Err(FactionError::InvalidInput)` - The new economy does not fit in an `i32`
    pub async fn adjust_economy(&self, name: &str, delta: i32) -> Result<Faction, AppError> {
        let repo = FactionRepository::new(self.db);

        let Some(faction) = repo.find_by_name(name).await? else {
            return Err(FactionError::NotFound(name.to_string()).into());
        };

        let economy = faction.economy.checked_add(delta).ok_or_else(|| {
            FactionError::InvalidInput(format!("Economy of faction {} is out of range.", name))
        })?;

        repo.set_economy(faction.id, economy).await
    }

    /// Removes a faction.
    ///
    /// # Returns
    /// - `Ok(())` - Faction removed
    /// - `Err(FactionError::NotFound)` - No faction with this name
    pub async fn remove(&self, name: &str) -> Result<(), AppError> {
        let deleted = FactionRepository::new(self.db).delete_by_name(name).await?;

        if deleted == 0 {
            return Err(FactionError::NotFound(name.to_string()).into());
        }

        tracing::info!("Removed faction {}", name);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::Faction as FactionEntity;
    use test_utils::{builder::TestBuilder, factory::faction::FactionFactory};

    fn reds() -> CreateFactionParam {
        CreateFactionParam {
            name: "Reds".to_string(),
            leader: "Alice".to_string(),
            member_count: 5,
            owner_user_id: "u1".to_string(),
        }
    }

    fn faction_error(result: Result<impl std::fmt::Debug, AppError>) -> FactionError {
        match result {
            Err(AppError::FactionErr(err)) => err,
            other => panic!("expected faction error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_then_find_returns_defaults() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(FactionEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = FactionService::new(db);

        service.create(reds()).await?;
        let faction = service.find_by_name("Reds").await?.expect("faction exists");

        assert_eq!(faction.economy, 100);
        assert_eq!(faction.money, 1000);
        assert_eq!(faction.leader.as_deref(), Some("Alice"));
        assert_eq!(
            faction.members,
            FactionMembers {
                count: 5,
                user_id: "u1".to_string()
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_create_conflicts_and_keeps_original() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(FactionEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = FactionService::new(db);

        service.create(reds()).await?;
        let result = service
            .create(CreateFactionParam {
                leader: "Bob".to_string(),
                member_count: 3,
                ..reds()
            })
            .await;

        assert_eq!(
            faction_error(result),
            FactionError::Conflict("Reds".to_string())
        );
        let faction = service.find_by_name("Reds").await?.unwrap();
        assert_eq!(faction.leader.as_deref(), Some("Alice"));
        assert_eq!(faction.members.count, 5);

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(FactionEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = FactionService::new(db);

        let blank_name = service
            .create(CreateFactionParam {
                name: "  ".to_string(),
                ..reds()
            })
            .await;
        let blank_leader = service
            .create(CreateFactionParam {
                leader: String::new(),
                ..reds()
            })
            .await;
        let negative_count = service
            .create(CreateFactionParam {
                member_count: -1,
                ..reds()
            })
            .await;

        assert!(matches!(faction_error(blank_name), FactionError::InvalidInput(_)));
        assert!(matches!(faction_error(blank_leader), FactionError::InvalidInput(_)));
        assert!(matches!(faction_error(negative_count), FactionError::InvalidInput(_)));
        assert!(service.list_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn double_sabotage_lowers_economy_by_twenty() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(FactionEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = FactionService::new(db);

        service.create(reds()).await?;
        let first = service.adjust_economy("Reds", -10).await?;
        let second = service.adjust_economy("Reds", -10).await?;

        assert_eq!(first.economy, 90);
        assert_eq!(second.economy, 80);
        assert_eq!(service.find_by_name("Reds").await?.unwrap().economy, 80);

        Ok(())
    }

    #[tokio::test]
    async fn adjust_economy_of_absent_faction_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(FactionEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = FactionService::new(db);

        let result = service.adjust_economy("Nobody", -10).await;

        assert_eq!(
            faction_error(result),
            FactionError::NotFound("Nobody".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn adjust_economy_rejects_overflow() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(FactionEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        FactionFactory::new(db)
            .name("Broke")
            .economy(i32::MIN + 5)
            .build()
            .await?;
        let service = FactionService::new(db);

        let result = service.adjust_economy("Broke", -10).await;

        assert!(matches!(faction_error(result), FactionError::InvalidInput(_)));
        assert_eq!(
            service.find_by_name("Broke").await?.unwrap().economy,
            i32::MIN + 5
        );

        Ok(())
    }

    #[tokio::test]
    async fn updates_ignore_unknown_factions() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(FactionEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = FactionService::new(db);

        service.create(reds()).await?;

        assert_eq!(service.update_economy("Reds", 55).await?, 1);
        assert_eq!(service.update_money("Reds", 10).await?, 1);
        assert_eq!(service.update_economy("Blues", 55).await?, 0);
        assert_eq!(service.update_money("Blues", 10).await?, 0);

        let faction = service.find_by_name("Reds").await?.unwrap();
        assert_eq!(faction.economy, 55);
        assert_eq!(faction.money, 10);

        Ok(())
    }

    #[tokio::test]
    async fn remove_then_find_returns_none() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(FactionEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = FactionService::new(db);

        service.create(reds()).await?;
        service.remove("Reds").await?;

        assert!(service.find_by_name("Reds").await?.is_none());
        assert_eq!(
            faction_error(service.remove("Reds").await),
            FactionError::NotFound("Reds".to_string())
        );

        Ok(())
    }
}
