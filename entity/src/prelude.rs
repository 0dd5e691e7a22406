pub use super::faction::Entity as Faction;
pub use super::user::Entity as User;
