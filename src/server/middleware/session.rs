//! Typed access to the values the dashboard keeps in the session.
//!
//! The session holds two things: the Discord ID of the logged-in user and, while a login is
//! in flight, the OAuth2 state token. Each gets its own wrapper so handlers never touch raw
//! session keys.

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_discord_id};

const USER_KEY: &str = "auth:user";
const CSRF_KEY: &str = "auth:csrf_token";

/// Logged-in user stored in the session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as logged in as the given Discord user.
    pub async fn set_user_id(&self, discord_id: u64) -> Result<(), AppError> {
        // Stored as a string; snowflakes exceed the range JSON numbers keep exact.
        self.session.insert(USER_KEY, discord_id.to_string()).await?;

        Ok(())
    }

    /// Discord ID of the logged-in user, `None` for an anonymous session.
    ///
    /// # Returns
    /// - `Ok(Option<u64>)` - The stored ID, if any
    /// - `Err(AppError::SessionErr)` - The session store failed
    /// - `Err(AppError::InternalErr)` - The stored value is not a Discord ID
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        match self.session.get::<String>(USER_KEY).await? {
            Some(stored) => Ok(Some(parse_discord_id(&stored)?)),
            None => Ok(None),
        }
    }

    /// Logs out, dropping every value in the session including a pending CSRF token.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// OAuth2 state token for a login in progress.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(CSRF_KEY, token).await?;

        Ok(())
    }

    /// Removes and returns the pending token. A token can be checked only once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove::<String>(CSRF_KEY).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn stores_and_clears_user_id() -> Result<(), AppError> {
        let mut test = TestBuilder::new().build().await.unwrap();
        let session = test.session().await.unwrap();
        let auth_session = AuthSession::new(session);

        assert_eq!(auth_session.get_user_id().await?, None);

        auth_session.set_user_id(623172201088286725).await?;
        assert_eq!(auth_session.get_user_id().await?, Some(623172201088286725));

        auth_session.clear().await;
        assert_eq!(auth_session.get_user_id().await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn csrf_token_is_single_use() -> Result<(), AppError> {
        let mut test = TestBuilder::new().build().await.unwrap();
        let session = test.session().await.unwrap();
        let csrf_session = CsrfSession::new(session);

        csrf_session.set_token("state-token".to_string()).await?;

        assert_eq!(csrf_session.take_token().await?, Some("state-token".to_string()));
        assert_eq!(csrf_session.take_token().await?, None);

        Ok(())
    }
}
