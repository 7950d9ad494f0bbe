//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input,
//! apply the portal's rules (import scoring, mix placement, casino payouts) and group
//! multi-step writes into transactions. They return domain models, never DTOs.

pub mod admin;
pub mod auth;
pub mod bet;
pub mod casino;
pub mod championship;
pub mod import;
pub mod matches;
pub mod mix;
pub mod news;
pub mod payment;
pub mod ranking;
pub mod report;
pub mod user;

#[cfg(test)]
mod test;
