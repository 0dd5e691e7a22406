//! Chat commands for managing factions from a Discord channel.
//!
//! Messages are matched against the command prefixes in a fixed order and the first match
//! wins, so `!sabotageX` is still a sabotage. Arguments are the whitespace-separated tokens
//! following the command token. Executing a command always yields a reply; store failures are
//! logged and replaced with a generic message for that command.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{faction::FactionError, AppError},
    model::faction::{CreateFactionParam, Faction},
    service::faction::FactionService,
};

/// Economy lost by a faction each time it is sabotaged.
pub const SABOTAGE_PENALTY: i32 = 10;

const SABOTAGE_USAGE: &str = "Invalid command format. Use: !sabotage <name>";
const ADD_FACTION_USAGE: &str =
    "Invalid command format. Use: !addFaction <name> <leader> <memberCount>";
const REMOVE_FACTION_USAGE: &str = "Invalid command format. Use: !removeFaction <name>";

/// A recognised chat command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactionCommand {
    Sabotage {
        name: Option<String>,
    },
    /// `None` when the arguments are missing or the member count is not an integer.
    AddFaction(Option<AddFactionArgs>),
    ListFactions,
    RemoveFaction {
        name: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFactionArgs {
    pub name: String,
    pub leader: String,
    pub member_count: i64,
}

impl FactionCommand {
    /// Recognises a command in the message content.
    ///
    /// # Returns
    /// - `Some(FactionCommand)` - The message starts with a command prefix
    /// - `None` - Ordinary chat message
    pub fn parse(content: &str) -> Option<Self> {
        let mut args = content.split_whitespace().skip(1);

        if content.starts_with("!sabotage") {
            Some(Self::Sabotage {
                name: args.next().map(str::to_string),
            })
        } else if content.starts_with("!addFaction") {
            let parsed = match (args.next(), args.next(), args.next()) {
                (Some(name), Some(leader), Some(count)) => {
                    count.parse::<i64>().ok().map(|member_count| AddFactionArgs {
                        name: name.to_string(),
                        leader: leader.to_string(),
                        member_count,
                    })
                }
                _ => None,
            };
            Some(Self::AddFaction(parsed))
        } else if content.starts_with("!listFactions") {
            Some(Self::ListFactions)
        } else if content.starts_with("!removeFaction") {
            Some(Self::RemoveFaction {
                name: args.next().map(str::to_string),
            })
        } else {
            None
        }
    }
}

/// Reply to post in the channel and whether the faction status should be announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Text posted back to the channel the command came from.
    pub reply: String,
    /// Set when the command changed a faction and the status panels should be republished.
    pub announce: bool,
}

impl CommandOutcome {
    fn reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            announce: false,
        }
    }

    fn announce(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            announce: true,
        }
    }
}

/// Runs chat commands against the faction store.
///
/// Commands never fail from the caller's point of view: every outcome, including store
/// errors, is turned into a reply for the channel.
pub struct FactionCommandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionCommandService<'a> {
    /// Creates a new FactionCommandService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Executes a command sent by the given Discord user.
    ///
    /// The author becomes the owner of factions created with `!addFaction`.
    ///
    /// # Arguments
    /// - `command` - Parsed chat command
    /// - `author_id` - Discord ID of the message author
    ///
    /// # Returns
    /// - `CommandOutcome` - Reply text, with `announce` set after a successful change
    pub async fn execute(&self, command: FactionCommand, author_id: u64) -> CommandOutcome {
        let service = FactionService::new(self.db);

        match command {
            FactionCommand::Sabotage { name: None } => CommandOutcome::reply(SABOTAGE_USAGE),
            FactionCommand::Sabotage { name: Some(name) } => {
                match service.adjust_economy(&name, -SABOTAGE_PENALTY).await {
                    Ok(faction) => CommandOutcome::announce(format!(
                        "Successfully sabotaged {}. New economy: {}%",
                        faction.name, faction.economy
                    )),
                    Err(err) => failure_reply(err, "sabotage the faction"),
                }
            }
            FactionCommand::AddFaction(None) => CommandOutcome::reply(ADD_FACTION_USAGE),
            FactionCommand::AddFaction(Some(args)) => {
                let param = CreateFactionParam {
                    name: args.name,
                    leader: args.leader,
                    member_count: args.member_count,
                    owner_user_id: author_id.to_string(),
                };

                match service.create(param).await {
                    Ok(faction) => CommandOutcome::announce(format!(
                        "Faction {} with leader {} and {} members has been created.",
                        faction.name,
                        faction.leader_display(),
                        faction.members.count
                    )),
                    Err(AppError::FactionErr(FactionError::InvalidInput(_))) => {
                        CommandOutcome::reply(ADD_FACTION_USAGE)
                    }
                    Err(err) => failure_reply(err, "add the faction"),
                }
            }
            FactionCommand::ListFactions => match service.list_all().await {
                Ok(factions) => CommandOutcome::reply(faction_listing(&factions)),
                Err(err) => failure_reply(err, "list the factions"),
            },
            FactionCommand::RemoveFaction { name: None } => {
                CommandOutcome::reply(REMOVE_FACTION_USAGE)
            }
            FactionCommand::RemoveFaction { name: Some(name) } => {
                match service.remove(&name).await {
                    Ok(()) => CommandOutcome::announce(format!("Faction {} has been removed.", name)),
                    Err(err) => failure_reply(err, "remove the faction"),
                }
            }
        }
    }
}

/// Echoes faction errors to the channel; anything else is logged and hidden.
fn failure_reply(err: AppError, action: &str) -> CommandOutcome {
    match err {
        AppError::FactionErr(err) => CommandOutcome::reply(err.to_string()),
        err => {
            tracing::error!("Failed to {} from chat command: {}", action, err);
            CommandOutcome::reply(format!(
                "An error occurred while trying to {}.",
                action
            ))
        }
    }
}

/// Reply to `!listFactions`, one line per faction in store order.
fn faction_listing(factions: &[Faction]) -> String {
    if factions.is_empty() {
        return "No factions found.".to_string();
    }

    factions.iter().fold("Factions:\n".to_string(), |mut reply, faction| {
        reply.push_str(&format!(
            "Name: {}, Leader: {}, Members: {}\n",
            faction.name,
            faction.leader_display(),
            faction.members.count
        ));
        reply
    })
}
