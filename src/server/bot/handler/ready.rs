//! Ready event handler.
//!
//! Fired once the bot completes the gateway handshake. The bot advertises the
//! listing command in its activity so members can discover the chat commands.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

const ACTIVITY: &str = "!listFactions";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    ctx.set_activity(Some(ActivityData::listening(ACTIVITY)));

    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );
}
