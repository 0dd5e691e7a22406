//! Faction data repository for database operations.
//!
//! Factions are addressed by their unique name everywhere outside this module. The repository
//! returns domain models; validation and the mapping of missing rows or unique violations to
//! user-facing errors happen in the faction service.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::faction::{Faction, FactionMembers, DEFAULT_ECONOMY, DEFAULT_MONEY},
};

pub struct FactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every faction in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Faction>, AppError> {
        let entities = entity::prelude::Faction::find()
            .order_by_asc(entity::faction::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| Faction::from_entity(entity).map_err(AppError::from))
            .collect()
    }

    /// Finds a faction by its exact name.
    ///
    /// # Returns
    /// - `Ok(Some(Faction))` - Faction found
    /// - `Ok(None)` - No faction with that name
    /// - `Err(AppError)` - Database error or unreadable stored roster
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Faction>, AppError> {
        let entity = entity::prelude::Faction::find()
            .filter(entity::faction::Column::Name.eq(name))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(Faction::from_entity(entity)?)),
            None => Ok(None),
        }
    }

    /// Inserts a new faction with the default economy and money.
    ///
    /// # Returns
    /// - `Ok(Faction)` - The created faction
    /// - `Err(AppError::DbErr)` - Database error, including a unique violation on the name
    pub async fn create(
        &self,
        name: String,
        leader: String,
        members: FactionMembers,
    ) -> Result<Faction, AppError> {
        let entity = entity::faction::ActiveModel {
            name: ActiveValue::Set(name),
            leader: ActiveValue::Set(Some(leader)),
            economy: ActiveValue::Set(DEFAULT_ECONOMY),
            money: ActiveValue::Set(DEFAULT_MONEY),
            members: ActiveValue::Set(members.to_json()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Faction::from_entity(entity)?)
    }

    /// Overwrites the economy of every faction with the given name.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, `0` when no faction matched
    pub async fn update_economy(&self, name: &str, economy: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Faction::update_many()
            .col_expr(
                entity::faction::Column::Economy,
                sea_orm::sea_query::Expr::value(economy),
            )
            .filter(entity::faction::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Overwrites the money of every faction with the given name.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, `0` when no faction matched
    pub async fn update_money(&self, name: &str, money: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Faction::update_many()
            .col_expr(
                entity::faction::Column::Money,
                sea_orm::sea_query::Expr::value(money),
            )
            .filter(entity::faction::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Stores a new economy value for a faction previously read by the caller.
    pub async fn set_economy(&self, id: i32, economy: i32) -> Result<Faction, AppError> {
        let entity = entity::faction::ActiveModel {
            id: ActiveValue::Unchanged(id),
            economy: ActiveValue::Set(economy),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Faction::from_entity(entity)?)
    }

    /// Deletes the faction with the given name.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, `0` when no faction matched
    pub async fn delete_by_name(&self, name: &str) -> Result<u64, AppError> {
        let result = entity::prelude::Faction::delete_many()
            .filter(entity::faction::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
