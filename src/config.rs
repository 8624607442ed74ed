use std::env;
use std::net::SocketAddr;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    /// Serve courses from the in-memory store instead of the database.
    pub debug_data: bool,
    pub seed_mock_data: bool,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Where the health check reaches the running API.
    pub base_url: String,
    pub cors_origin: String,
}

impl Config {
    pub fn new_from_env() -> Result<Self, AppError> {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|_| AppError::Validation("BIND_ADDR is not a valid socket address".to_string()))?;

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| format!("http://{}", bind_addr));

        Ok(Self {
            debug_data: env_flag("DEBUG_DATA", true)?,
            seed_mock_data: env_flag("SEED_MOCK_DATA", true)?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://coursify.db".to_string()),
            bind_addr,
            base_url,
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }

    /// Mock-backed configuration serving on `bind_addr`.
    pub fn for_addr(bind_addr: SocketAddr) -> Self {
        Self {
            debug_data: true,
            seed_mock_data: true,
            database_url: "sqlite::memory:".to_string(),
            bind_addr,
            base_url: format!("http://{}", bind_addr),
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

fn env_flag(key: &str, default: bool) -> Result<bool, AppError> {
    match env::var(key) {
        Ok(value) => parse_flag(&value)
            .ok_or_else(|| AppError::Validation(format!("{} must be true or false", key))),
        Err(_) => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
