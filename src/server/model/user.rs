//! User domain models and parameters.
//!
//! Users are recorded on every successful Discord login so that the session only needs to
//! carry the Discord ID. Admin rights are not stored; they come from the configured
//! allow-list.

use crate::{
    model::user::UserDto,
    server::{error::internal::InternalError, util::parse::parse_discord_id},
};

/// Logged-in dashboard user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(InternalError::ParseStringId)` - Stored Discord ID is not a valid u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, InternalError> {
        Ok(Self {
            discord_id: parse_discord_id(&entity.discord_id)?,
            name: entity.name,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
        }
    }
}

/// Parameters for upserting a user after authentication.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
}
