//! Dashboard pages and form handlers for managing factions.
//!
//! Every handler requires a logged-in user. Form bodies are taken as a `Result` and only
//! unwrapped after the auth guard has passed, so a non-admin posting any add-faction body
//! gets a 403 and an anonymous user is sent to the login page. Fields are optional so that
//! missing values are reported by the handler as a 400 rather than by the extractor.

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Redirect},
    Form,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    client::render_home,
    model::faction::DashboardDto,
    server::{
        error::{faction::FactionError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::faction::CreateFactionParam,
        service::{announcement::spawn_announcement, faction::FactionService},
        state::AppState,
    },
};

/// Form posted by the economy input of a faction row.
///
/// # Fields
/// - `faction_name` - Name of the faction to update (`factionName`)
/// - `economy` - New economy score, must parse as an integer
#[derive(Deserialize)]
pub struct UpdateEconomyForm {
    #[serde(rename = "factionName")]
    pub faction_name: Option<String>,
    pub economy: Option<String>,
}

/// Form posted by the money input of a faction row.
///
/// # Fields
/// - `faction_name` - Name of the faction to update (`factionName`)
/// - `money` - New amount of money, must parse as an integer
#[derive(Deserialize)]
pub struct UpdateMoneyForm {
    #[serde(rename = "factionName")]
    pub faction_name: Option<String>,
    pub money: Option<String>,
}

/// Form posted by the remove button of a faction row.
#[derive(Deserialize)]
pub struct RemoveFactionForm {
    #[serde(rename = "factionName")]
    pub faction_name: Option<String>,
}

/// Form posted by the admin-only add-faction panel.
///
/// # Fields
/// - `name` - Unique faction name
/// - `leader` - Display name of the leader
/// - `member_count` - Non-negative member count (`memberCount`)
/// - `user_id` - Discord ID of the owner (`userID`); the acting admin when blank
#[derive(Deserialize)]
pub struct AddFactionForm {
    pub name: Option<String>,
    pub leader: Option<String>,
    #[serde(rename = "memberCount")]
    pub member_count: Option<String>,
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
}

/// Renders the dashboard with every faction and the ones owned by the logged-in user.
///
/// Ownership is matched on the Discord ID stored in the faction roster. Admins also get the
/// add-faction form.
///
/// # Returns
/// - `Html` - The rendered dashboard
/// - `Err(AppError::AuthErr)` - Not logged in (redirect to the login page)
/// - `Err(AppError)` - Store failure (500 with a generic message)
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session, &state.admins);
    let user = guard.require(&[]).await?;
    let is_admin = guard.is_admin(&user);

    let factions = FactionService::new(&state.db).list_all().await?;
    let my_factions = factions
        .iter()
        .filter(|faction| faction.is_owned_by(user.discord_id))
        .cloned()
        .map(|faction| faction.into_dto())
        .collect();

    let dashboard = DashboardDto {
        user: user.into_dto(),
        is_admin,
        factions: factions.into_iter().map(|faction| faction.into_dto()).collect(),
        my_factions,
    };

    Ok(Html(render_home(dashboard)))
}

/// Overwrites the economy score of a faction.
///
/// An unknown faction name is ignored; the user is sent back to the dashboard either way.
///
/// # Returns
/// - `Redirect` - 303 to the dashboard
/// - `Err(AppError::AuthErr)` - Not logged in
/// - `Err(AppError::FactionErr)` - Malformed body, missing name or non-integer value (400)
pub async fn update_economy(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<UpdateEconomyForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.admins)
        .require(&[])
        .await?;

    let form = form_body(form)?;
    let name = required_field(form.faction_name, "Faction name")?;
    let economy = integer_field(form.economy, "Economy")?;

    FactionService::new(&state.db)
        .update_economy(&name, economy)
        .await?;

    Ok(Redirect::to("/"))
}

/// Overwrites the money of a faction.
///
/// Behaves like [`update_economy`] for unknown names and invalid values.
pub async fn update_money(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<UpdateMoneyForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.admins)
        .require(&[])
        .await?;

    let form = form_body(form)?;
    let name = required_field(form.faction_name, "Faction name")?;
    let money = integer_field(form.money, "Money")?;

    FactionService::new(&state.db)
        .update_money(&name, money)
        .await?;

    Ok(Redirect::to("/"))
}

/// Removes a faction and announces the new status in the background.
///
/// The redirect is built before the announcement task is spawned and never waits on it.
///
/// # Returns
/// - `Redirect` - 303 to the dashboard
/// - `Err(AppError::FactionErr)` - Faction not found (404) or malformed body (400)
/// - `Err(AppError::DbErr)` - Store failure (500 with a generic message)
pub async fn remove_faction(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<RemoveFactionForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.admins)
        .require(&[])
        .await?;

    let form = form_body(form)?;
    let name = required_field(form.faction_name, "Faction name")?;

    FactionService::new(&state.db).remove(&name).await?;

    let response = Redirect::to("/");
    spawn_announcement(state.db.clone(), state.announcement.clone());

    Ok(response)
}

/// Creates a faction and announces the new status in the background. Admin only.
///
/// The owner is the `userID` field when given, otherwise the admin submitting the form.
///
/// # Returns
/// - `Redirect` - 303 to the dashboard
/// - `Err(AppError::AuthErr)` - Not logged in, or not an admin (403) whatever the body
/// - `Err(AppError::FactionErr)` - Invalid input (400) or duplicate name (409)
/// - `Err(AppError::DbErr)` - Store failure (500 with a generic message)
pub async fn add_faction(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<AddFactionForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session, &state.admins)
        .require(&[Permission::Admin])
        .await?;

    let form = form_body(form)?;
    let member_count = form
        .member_count
        .as_deref()
        .map(str::trim)
        .filter(|count| !count.is_empty())
        .ok_or_else(|| FactionError::InvalidInput("Member count is required.".to_string()))?
        .parse::<i64>()
        .map_err(|_| FactionError::InvalidInput("Member count must be an integer.".to_string()))?;

    let owner_user_id = form
        .user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| admin.discord_id.to_string());

    FactionService::new(&state.db)
        .create(CreateFactionParam {
            name: form.name.unwrap_or_default(),
            leader: form.leader.unwrap_or_default(),
            member_count,
            owner_user_id,
        })
        .await?;

    let response = Redirect::to("/");
    spawn_announcement(state.db.clone(), state.announcement.clone());

    Ok(response)
}

/// Unwraps a form body the extractor could not decode, such as one with a repeated field.
fn form_body<T>(form: Result<Form<T>, FormRejection>) -> Result<T, FactionError> {
    match form {
        Ok(Form(form)) => Ok(form),
        Err(rejection) => {
            tracing::debug!("Rejected form body: {}", rejection.body_text());
            Err(FactionError::InvalidInput("Invalid form submission.".to_string()))
        }
    }
}

fn required_field(value: Option<String>, label: &str) -> Result<String, FactionError> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| FactionError::InvalidInput(format!("{} is required.", label)))
}

fn integer_field(value: Option<String>, label: &str) -> Result<i32, FactionError> {
    required_field(value, label)?
        .parse::<i32>()
        .map_err(|_| FactionError::InvalidInput(format!("{} must be an integer.", label)))
}
