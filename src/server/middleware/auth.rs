//! Access control for dashboard requests.
//!
//! `AuthGuard` resolves the logged-in user from the session and checks the permissions a
//! handler asks for. Admin rights come from the configured allow-list rather than the
//! database.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    config::AdminAllowList,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// Listed in the admin allow-list.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    admins: &'a AdminAllowList,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session, admins: &'a AdminAllowList) -> Self {
        Self {
            db,
            session,
            admins,
        }
    }

    /// Returns the logged-in user if they hold every requested permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated and authorized user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session refers to an unknown user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.admins.contains(user.discord_id) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without being an admin".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Whether the user may perform admin actions.
    pub fn is_admin(&self, user: &User) -> bool {
        self.admins.contains(user.discord_id)
    }
}
