//! Discord bot integration for chat commands and announcements.
//!
//! The bot listens to guild messages and runs the faction chat commands. It is
//! initialized during server startup and runs in a separate tokio task to avoid
//! blocking the HTTP server. The bot's HTTP client is shared with the dashboard, which
//! posts faction status announcements through it.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, and deletion
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
