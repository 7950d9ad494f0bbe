//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. The scoring rules of the portal
//! (MVP score, skill rating, mix placement, casino tables, bet odds) live here as pure
//! functions so services only orchestrate storage around them.

pub mod bet;
pub mod casino;
pub mod championship;
pub mod matches;
pub mod mix;
pub mod news;
pub mod payment;
pub mod ranking;
pub mod report;
pub mod stats;
pub mod user;
