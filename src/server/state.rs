//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - OAuth2 client for Discord authentication
//! - Announcement channel receiving faction status updates
//! - Admin allow-list

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::AdminAllowList, service::announcement::AnnouncementChannel};

/// Type alias for the OAuth2 client configured for Discord authentication.
///
/// Auth and token endpoints are set; device authorization, introspection and revocation
/// are not used.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - The announcement channel and admin list are reference-counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured without redirects. Used for the OAuth2 token exchange and to fetch the
    /// logged-in Discord user.
    pub http_client: reqwest::Client,

    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Destination of faction status announcements triggered from the dashboard.
    pub announcement: Arc<dyn AnnouncementChannel>,

    /// Discord IDs allowed to create factions.
    pub admins: AdminAllowList,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for the OAuth2 exchange and Discord user lookup
    /// - `oauth_client` - Discord OAuth2 client
    /// - `announcement` - Channel receiving faction status panels
    /// - `admins` - Discord IDs allowed to create factions
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        announcement: Arc<dyn AnnouncementChannel>,
        admins: AdminAllowList,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            announcement,
            admins,
        }
    }
}
