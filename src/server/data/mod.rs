//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`. Every repository is generic over `ConnectionTrait` so the same
//! code runs against the pool or inside a transaction.

use sea_orm::{DbErr, SqlErr};

pub mod bet;
pub mod casino;
pub mod championship;
pub mod match_stats;
pub mod matches;
pub mod mix;
pub mod news;
pub mod payment;
pub mod ranking;
pub mod report;
pub mod user;


/// Whether a database error was raised by a unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Number of pages needed for `total` items.
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}
