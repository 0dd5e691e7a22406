//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and handed to
//! the views or chat replies by the service layer.

pub mod announcement;
pub mod faction;
pub mod user;
