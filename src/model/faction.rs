use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FactionDto {
    pub id: i32,
    pub name: String,
    pub economy: i32,
    pub money: i32,
    pub leader: String,
    pub member_count: u32,
    /// Discord ID of the user who registered the faction.
    pub owner_id: String,
}

/// Everything shown on the dashboard for the logged-in user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardDto {
    pub user: UserDto,
    pub is_admin: bool,
    pub factions: Vec<FactionDto>,
    /// Factions registered by the logged-in user.
    pub my_factions: Vec<FactionDto>,
}
