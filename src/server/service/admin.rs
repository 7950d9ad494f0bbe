//! First-admin bootstrap.
//!
//! When the portal starts without any admin, a one-time code is generated and a login
//! link carrying it is logged. Logging in through that link grants admin rights.

pub mod code;
