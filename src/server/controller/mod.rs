//! HTTP handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts request DTOs into domain
//! parameters, calls a service and converts the result back into a response DTO.

pub mod auth;
pub mod casino;
pub mod championship;
pub mod matches;
pub mod mix;
pub mod news;
pub mod payment;
pub mod ranking;
pub mod report;
pub mod user;
