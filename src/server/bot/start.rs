use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord bot client without connecting to the gateway.
///
/// Returns the client together with its HTTP handle so the dashboard can post
/// announcements through the same connection pool.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and announcement channel
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its shared HTTP client
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, config.announcement_channel_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot to the gateway; blocks until the bot shuts down.
///
/// Should be called from within a `tokio::spawn` task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
