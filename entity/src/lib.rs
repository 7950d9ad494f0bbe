//! SeaORM entity definitions for the portal schema.

pub mod prelude;

pub mod bet;
pub mod casino_balance;
pub mod championship_registration;
pub mod match_stats;
pub mod matches;
pub mod mix_availability;
pub mod mix_penalty;
pub mod monthly_ranking;
pub mod news;
pub mod payment;
pub mod report;
pub mod user;
