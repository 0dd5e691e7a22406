use std::{collections::HashSet, net::SocketAddr, sync::Arc};

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Channel receiving faction status announcements.
    pub announcement_channel_id: u64,
    /// Discord IDs allowed to create factions from the dashboard.
    pub admins: AdminAllowList,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address: parse_var("BIND_ADDRESS", bind_address)?,
            discord_client_id: required_var("DISCORD_CLIENT_ID")?,
            discord_client_secret: required_var("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required_var("DISCORD_REDIRECT_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            announcement_channel_id: parse_var(
                "ANNOUNCEMENT_CHANNEL_ID",
                required_var("ANNOUNCEMENT_CHANNEL_ID")?,
            )?,
            admins: AdminAllowList::parse(&std::env::var("ADMIN_DISCORD_IDS").unwrap_or_default())?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_var<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
        value,
    })
}

/// Static set of Discord IDs with admin rights on the dashboard.
///
/// Cheap to clone; shared between the router state and request handlers.
#[derive(Debug, Clone, Default)]
pub struct AdminAllowList(Arc<HashSet<u64>>);

impl AdminAllowList {
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        Self(Arc::new(ids.into_iter().collect()))
    }

    /// Parses a comma-separated list of Discord IDs. Blank entries are skipped.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| parse_var::<u64>("ADMIN_DISCORD_IDS", id.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(ids))
    }

    pub fn contains(&self, discord_id: u64) -> bool {
        self.0.contains(&discord_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
