//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - HTTP client for Steam OpenID verification and profile lookups
//! - Admin code service for bootstrapping the first admin
//! - Application URL and optional Steam Web API key

use sea_orm::DatabaseConnection;

use super::service::admin::code::AdminCodeService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `AdminCodeService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Steam requests.
    ///
    /// Configured without redirects to prevent SSRF through crafted OpenID parameters.
    pub http_client: reqwest::Client,

    /// Service for the one-time admin code used to create the first admin.
    pub admin_code_service: AdminCodeService,

    /// Application base URL without trailing slash.
    pub app_url: String,

    /// Steam Web API key, when configured.
    pub steam_api_key: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for Steam requests
    /// - `admin_code_service` - Service for managing admin codes
    /// - `app_url` - Application base URL
    /// - `steam_api_key` - Optional Steam Web API key
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        admin_code_service: AdminCodeService,
        app_url: String,
        steam_api_key: Option<String>,
    ) -> Self {
        Self {
            db,
            http_client,
            admin_code_service,
            app_url,
            steam_api_key,
        }
    }
}
