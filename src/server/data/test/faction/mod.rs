use crate::server::{
    data::faction::FactionRepository,
    error::AppError,
    model::faction::{FactionMembers, DEFAULT_ECONOMY, DEFAULT_MONEY},
};
use entity::prelude::Faction;
use test_utils::{builder::TestBuilder, factory::faction::FactionFactory};

mod create;
mod delete_by_name;
mod find_by_name;
mod get_all;
mod set_economy;
mod update_economy;
mod update_money;
