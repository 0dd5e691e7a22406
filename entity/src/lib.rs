//! SeaORM entities for the factionboard schema.

pub mod prelude;

pub mod faction;
pub mod user;
