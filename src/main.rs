mod client;
mod model;
mod server;

use std::sync::Arc;

use dioxus_logger::tracing::{self, Level};

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    service::announcement::{AnnouncementChannel, DiscordAnnouncementChannel},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    // Initialize Discord bot and extract HTTP client
    let bot_db = db.clone();
    let (bot_client, discord_http) = bot::start::init_bot(&config, bot_db).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let announcement: Arc<dyn AnnouncementChannel> = Arc::new(DiscordAnnouncementChannel::new(
        discord_http,
        config.announcement_channel_id,
    ));

    let router = server::router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            announcement,
            config.admins.clone(),
        ))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
