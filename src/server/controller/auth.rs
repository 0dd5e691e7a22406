use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    client::render_login,
    server::{
        error::{
            auth::{AuthError, LOGIN_PATH},
            AppError,
        },
        middleware::session::{AuthSession, CsrfSession},
        service::auth::DiscordAuthService,
        state::AppState,
    },
};

/// Query parameters Discord appends when redirecting back to the callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
/// - `error` - Set instead of `code` when the user declined or Discord failed
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Renders the login page.
pub async fn login_page() -> impl IntoResponse {
    Html(render_login())
}

/// Starts the Discord login by redirecting to Discord's consent screen.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the Discord login and stores the user in the session.
///
/// Every failure, including the user declining on Discord, ends on the login page.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(error) = params.error {
        return Err(AuthError::ProviderDenied(error).into());
    }

    validate_csrf(&session, params.state.as_deref()).await?;

    let Some(code) = params.code else {
        return Err(AuthError::MissingAuthorizationCode.into());
    };

    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);
    let user = auth_service.callback(code).await?;

    AuthSession::new(&session)
        .set_user_id(user.discord_id)
        .await?;

    Ok(Redirect::to("/"))
}

pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to(LOGIN_PATH)
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match (stored_state, csrf_state) {
        (Some(stored), Some(received)) if stored == received => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
