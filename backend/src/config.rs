//! # Configuration
//!
//! Environment-driven settings for the server. `DATABASE_URL` is the only
//! required value; everything else has a development default.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_ADMIN_PASSWORD: &str = "changeme123";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable is not set")]
    MissingDatabaseUrl,
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
    #[error("CORS_ORIGIN is not a valid header value: {0}")]
    InvalidCorsOrigin(String),
}

/// Runtime configuration for the backend.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Directory with a pre-built front-end, served for non-API paths
    pub static_dir: Option<PathBuf>,
    pub admin_email: String,
    pub admin_password: String,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let cors_raw = get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = cors_raw
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidCorsOrigin(cors_raw.clone()))?;

        Ok(Self {
            database_url,
            bind_addr,
            cors_origin,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            admin_email: get("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: get("ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
        })
    }
}
