use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,
    /// Public base URL, used for the Steam OpenID realm and return address.
    pub app_url: String,
    pub bind_address: SocketAddr,
    pub allowed_origins: Vec<String>,
    /// Steam Web API key used to fetch persona names and avatars on login.
    pub steam_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidEnvVar("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?
                .trim_end_matches('/')
                .to_string(),
            bind_address,
            allowed_origins,
            steam_api_key: std::env::var("STEAM_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        })
    }
}
