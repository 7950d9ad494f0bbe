//! Factory methods for creating test data.
//!
//! Each entity has a factory module with either a `Factory` builder for customization
//! or `create_*` convenience functions for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let admin = factory::user::UserFactory::new(&db).admin(true).build().await?;
//!
//! let (game, stats) = factory::helpers::create_match_with_players(&db, &[a, b]).await?;
//! ```

pub mod casino;
pub mod helpers;
pub mod match_stats;
pub mod matches;
pub mod mix;
pub mod user;

pub use casino::create_balance;
pub use match_stats::create_match_stats;
pub use matches::create_match;
pub use mix::{create_penalty, create_signup};
pub use user::{create_admin, create_user};
