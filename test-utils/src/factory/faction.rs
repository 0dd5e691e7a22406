//! Faction factory for creating test faction entities.
//!
//! Inserted rows use the canonical `{"count": .., "userId": ".."}` roster unless a raw
//! members value is supplied, which lets tests seed legacy shapes such as `[]`.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test factions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let faction = FactionFactory::new(&db)
///     .name("Reds")
///     .economy(40)
///     .build()
///     .await?;
/// ```
pub struct FactionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    leader: Option<String>,
    economy: i32,
    money: i32,
    member_count: i64,
    owner: String,
    raw_members: Option<Value>,
}

impl<'a> FactionFactory<'a> {
    /// Creates a new FactionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Faction {id}"`
    /// - leader: `"Leader {id}"`
    /// - economy: `100`, money: `1000`
    /// - members: `{"count": 1, "userId": "{id}"}`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Faction {}", id),
            leader: Some(format!("Leader {}", id)),
            economy: 100,
            money: 1000,
            member_count: 1,
            owner: id.to_string(),
            raw_members: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = Some(leader.into());
        self
    }

    pub fn no_leader(mut self) -> Self {
        self.leader = None;
        self
    }

    pub fn economy(mut self, economy: i32) -> Self {
        self.economy = economy;
        self
    }

    pub fn money(mut self, money: i32) -> Self {
        self.money = money;
        self
    }

    pub fn member_count(mut self, count: i64) -> Self {
        self.member_count = count;
        self
    }

    /// Sets the Discord ID stored in `members.userId`.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Stores the given JSON verbatim in the members column.
    pub fn raw_members(mut self, members: Value) -> Self {
        self.raw_members = Some(members);
        self
    }

    /// Builds and inserts the faction entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::faction::Model)` - Created faction entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate name)
    pub async fn build(self) -> Result<entity::faction::Model, DbErr> {
        let members = self
            .raw_members
            .unwrap_or_else(|| json!({ "count": self.member_count, "userId": self.owner }));

        entity::faction::ActiveModel {
            name: ActiveValue::Set(self.name),
            leader: ActiveValue::Set(self.leader),
            economy: ActiveValue::Set(self.economy),
            money: ActiveValue::Set(self.money),
            members: ActiveValue::Set(members),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a faction with default values.
pub async fn create_faction(db: &DatabaseConnection) -> Result<entity::faction::Model, DbErr> {
    FactionFactory::new(db).build().await
}
