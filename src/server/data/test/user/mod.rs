use crate::server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam};
use test_utils::builder::TestBuilder;

mod find_by_discord_id;
mod upsert;
