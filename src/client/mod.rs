//! Server-rendered dashboard pages.
//!
//! Pages are dioxus components rendered to static HTML with `dioxus_ssr`. They carry no
//! client-side state: every action is a plain HTML form posting back to the server.

pub mod component;
pub mod constant;
pub mod route;

use dioxus::prelude::*;

use crate::{
    client::route::{Home, Login},
    model::faction::DashboardDto,
};

/// Renders the dashboard for a logged-in user as a complete HTML document.
pub fn render_home(dashboard: DashboardDto) -> String {
    render_document(rsx! {
        Home { dashboard }
    })
}

/// Renders the login page as a complete HTML document.
pub fn render_login() -> String {
    render_document(rsx! {
        Login {}
    })
}

fn render_document(page: Element) -> String {
    format!("<!DOCTYPE html>{}", dioxus_ssr::render_element(page))
}
