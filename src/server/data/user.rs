//! User data repository for database operations.
//!
//! Users are only ever written by the OAuth callback and read by the auth guard, so the
//! repository is limited to an upsert and a lookup by Discord ID.

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the user, or refreshes the stored name when the Discord ID is already known.
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_column(entity::user::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity)?)
    }

    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        let user = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()?;

        Ok(user)
    }
}
