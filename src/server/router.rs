use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{callback, login, login_page, logout},
        faction::{add_faction, home, remove_faction, update_economy, update_money},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_page))
        .route("/auth/discord", get(login))
        .route("/auth/discord/callback", get(callback))
        .route("/auth/logout", get(logout))
        .route("/update-economy", post(update_economy))
        .route("/update-money", post(update_money))
        .route("/remove-faction", post(remove_faction))
        .route("/add-faction", post(add_faction))
}
