//! Discord OAuth2 login.
//!
//! The dashboard only needs to know who the user is, so the login requests the `identify`
//! scope alone. A successful callback records the user so later requests can resolve the
//! Discord ID kept in the session.

use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

const DISCORD_CURRENT_USER_URL: &str = "https://discord.com/api/users/@me";

/// Service for the Discord OAuth2 login flow.
pub struct DiscordAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    /// Creates a new DiscordAuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state token to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Completes the login for an authorization code returned by Discord.
    ///
    /// Exchanges the code for an access token, fetches the Discord user and upserts it.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::TokenExchange)` - Discord rejected the code
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the user from Discord
    /// - `Err(AppError::DbErr)` - Failed to store the user
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get(),
                name: discord_user.name,
            })
            .await?;

        tracing::info!("User {} ({}) logged in", user.name, user.discord_id);

        Ok(user)
    }

    /// Retrieves the authenticated user's Discord profile.
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(DISCORD_CURRENT_USER_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }
}
