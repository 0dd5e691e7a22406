//! Message event handler running the faction chat commands.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::server::service::{
    announcement::{AnnouncementService, DiscordAnnouncementChannel},
    command::{FactionCommand, FactionCommandService},
};

/// Handles a message sent in any channel the bot can read.
///
/// Replies in the same channel, then announces the faction status when the command
/// changed a faction.
pub async fn handle_message(
    db: &DatabaseConnection,
    announcement_channel_id: u64,
    ctx: Context,
    message: Message,
) {
    let Some(command) = command_for(message.author.bot, &message.content) else {
        return;
    };

    tracing::debug!(
        "Running {:?} for user {} in channel {}",
        command,
        message.author.id,
        message.channel_id
    );

    let outcome = FactionCommandService::new(db)
        .execute(command, message.author.id.get())
        .await;

    if let Err(e) = message.channel_id.say(&ctx.http, &outcome.reply).await {
        tracing::error!(
            "Failed to reply in channel {}: {}",
            message.channel_id,
            e
        );
    }

    if outcome.announce {
        let channel = DiscordAnnouncementChannel::new(ctx.http.clone(), announcement_channel_id);
        AnnouncementService::new(db, &channel).announce().await;
    }
}

/// Commands are only taken from humans, which also keeps the bot from reacting to itself.
fn command_for(author_is_bot: bool, content: &str) -> Option<FactionCommand> {
    if author_is_bot {
        return None;
    }

    FactionCommand::parse(content)
}
