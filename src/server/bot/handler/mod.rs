use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Channel receiving faction status announcements.
    pub announcement_channel_id: u64,
}

impl Handler {
    pub fn new(db: DatabaseConnection, announcement_channel_id: u64) -> Self {
        Self {
            db,
            announcement_channel_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, self.announcement_channel_id, ctx, message).await;
    }
}
