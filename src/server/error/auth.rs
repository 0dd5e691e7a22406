use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

/// Entry point users are sent back to whenever authentication is missing or fails.
pub const LOGIN_PATH: &str = "/login";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No Discord ID stored in the session; the user never logged in or logged out.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists in the database.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(u64),

    /// The user is logged in but lacks a required permission.
    ///
    /// # Fields
    /// - Discord ID of the user
    /// - Description of the attempted action, for logs only
    #[error("User {0} denied access: {1}")]
    AccessDenied(u64, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Discord redirected back with an error instead of an authorization code.
    #[error("Discord rejected the authorization request: {0}")]
    ProviderDenied(String),

    /// The callback was reached without an authorization code.
    #[error("OAuth callback is missing the authorization code")]
    MissingAuthorizationCode,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Any failure of the login flow, or a missing session, redirects back to the login page.
/// Permission failures return 403 Forbidden with a generic message. Details are only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You are not authorized to perform this action.",
            )
                .into_response(),
            _ => Redirect::to(LOGIN_PATH).into_response(),
        }
    }
}
