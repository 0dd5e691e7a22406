//! Data transfer objects rendered by the dashboard pages.

pub mod faction;
pub mod user;
