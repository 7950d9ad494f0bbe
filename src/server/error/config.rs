use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be used.
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    /// Rate limiter settings were rejected by the governor builder.
    #[error("Invalid rate limiter configuration")]
    InvalidRateLimit,
}
