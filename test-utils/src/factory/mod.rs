//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let faction = factory::create_faction(&db).await?;
//!
//! let reds = factory::faction::FactionFactory::new(&db)
//!     .name("Reds")
//!     .leader("Alice")
//!     .member_count(5)
//!     .owner(&user.discord_id)
//!     .build()
//!     .await?;
//! ```

pub mod faction;
pub mod helpers;
pub mod user;

pub use faction::create_faction;
pub use user::create_user;
