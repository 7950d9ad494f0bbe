//! Data transfer objects shared by the API surface.
//!
//! Everything in this module is serialized with camelCase field names and documented
//! through utoipa so it shows up in the OpenAPI document.

pub mod api;
pub mod casino;
pub mod championship;
pub mod matches;
pub mod mix;
pub mod news;
pub mod payment;
pub mod ranking;
pub mod report;
pub mod user;
