//! Faction domain models and parameters.
//!
//! Provides the domain model for a faction along with its member roster, and the parameter
//! types used by the faction store. The roster is persisted as JSON; conversion from the
//! entity normalises every shape ever written to that column into `FactionMembers`.

use dioxus_logger::tracing;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::{model::faction::FactionDto, server::error::internal::InternalError};

/// Economy score given to newly created factions.
pub const DEFAULT_ECONOMY: i32 = 100;
/// Money given to newly created factions.
pub const DEFAULT_MONEY: i32 = 1000;

/// Faction with its economy, treasury and member roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Faction {
    /// Auto-assigned row ID.
    pub id: i32,
    /// Unique name, used as the natural key by every operation.
    pub name: String,
    /// Percentage-like health score.
    pub economy: i32,
    pub money: i32,
    /// Display name of the controlling user.
    pub leader: Option<String>,
    pub members: FactionMembers,
}

impl Faction {
    /// Converts an entity model to a faction domain model at the repository boundary.
    ///
    /// Legacy rosters stored as an empty list or `null` become an empty roster.
    ///
    /// # Returns
    /// - `Ok(Faction)` - The converted faction
    /// - `Err(InternalError::InvalidMembers)` - The members column holds an unknown shape
    pub fn from_entity(entity: entity::faction::Model) -> Result<Self, InternalError> {
        let members = match serde_json::from_value::<StoredMembers>(entity.members) {
            Ok(StoredMembers::Roster(members)) => members,
            Ok(StoredMembers::Legacy(_)) | Ok(StoredMembers::Missing) => {
                tracing::warn!(
                    "Faction {} has a legacy members roster, treating it as empty",
                    entity.name
                );
                FactionMembers::default()
            }
            Err(source) => {
                return Err(InternalError::InvalidMembers {
                    name: entity.name,
                    source,
                })
            }
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            economy: entity.economy,
            money: entity.money,
            leader: entity.leader,
            members,
        })
    }

    /// Whether the roster names the given Discord user as owner.
    pub fn is_owned_by(&self, discord_id: u64) -> bool {
        self.members.user_id == discord_id.to_string()
    }

    /// Leader name for display, with a placeholder when unset.
    pub fn leader_display(&self) -> &str {
        self.leader.as_deref().unwrap_or("Unknown")
    }

    pub fn into_dto(self) -> FactionDto {
        FactionDto {
            leader: self.leader_display().to_string(),
            id: self.id,
            name: self.name,
            economy: self.economy,
            money: self.money,
            member_count: self.members.count,
            owner_id: self.members.user_id,
        }
    }
}

/// Member roster of a faction, stored as `{"count": .., "userId": ".."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionMembers {
    /// Number of members.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub count: u32,
    /// Discord ID of the user who registered the faction.
    #[serde(rename = "userId", default)]
    pub user_id: String,
}

impl FactionMembers {
    /// JSON value written to the members column.
    pub fn to_json(&self) -> Value {
        json!({ "count": self.count, "userId": self.user_id })
    }
}

/// Every shape the members column has held.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredMembers {
    /// Old schema default `[]`. Listed first so it is not read as a positional struct.
    Legacy(Vec<Value>),
    Roster(FactionMembers),
    Missing,
}

/// Accepts the count as a number or as the numeric string the old web form stored.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(count) => Ok(count),
        Count::Text(text) => text.trim().parse::<u32>().map_err(D::Error::custom),
    }
}

/// Parameters for creating a faction.
///
/// Values arrive unvalidated from a form or chat command; the store rejects blank names,
/// blank leaders and negative member counts.
#[derive(Debug, Clone)]
pub struct CreateFactionParam {
    pub name: String,
    pub leader: String,
    pub member_count: i64,
    /// Discord ID recorded as `members.userId`.
    pub owner_user_id: String,
}
