use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::{AdminAllowList, Config},
    service::announcement::test_support::RecordingChannel,
    startup::{setup_oauth_client, setup_reqwest_client},
    state::AppState,
};


/// Builds an application state over the test database, recording announcements.
pub fn test_state(db: &DatabaseConnection, admins: &[u64]) -> (AppState, Arc<RecordingChannel>) {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:8080".parse().unwrap(),
        discord_client_id: "1234".to_string(),
        discord_client_secret: "secret".to_string(),
        discord_redirect_url: "http://localhost:8080/auth/discord/callback".to_string(),
        discord_bot_token: "token".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
        announcement_channel_id: 1,
        admins: AdminAllowList::new(admins.iter().copied()),
    };
    let channel = Arc::new(RecordingChannel::default());

    let state = AppState::new(
        db.clone(),
        setup_reqwest_client().unwrap(),
        setup_oauth_client(&config).unwrap(),
        channel.clone(),
        config.admins.clone(),
    );

    (state, channel)
}
