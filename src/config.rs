use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

use crate::domain::catalog::{DEFAULT_CATALOG_SIZE, MAX_CATALOG_SIZE};
use crate::errors::ServerError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_path: String,
    pub catalog_size: usize,
    pub max_workers: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ServerError> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            bind_addr: parse_var("BIND_ADDR", "127.0.0.1:3000")?,
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "listings.sqlite3".to_string()),
            catalog_size: check_catalog_size(parse_var(
                "CATALOG_SIZE",
                &DEFAULT_CATALOG_SIZE.to_string(),
            )?)?,
            max_workers: parse_var("MAX_WORKERS", "8")?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: &str) -> Result<T, ServerError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|_| ServerError::ConfigError(format!("{name} has an invalid value: {raw:?}")))
}

fn check_catalog_size(size: usize) -> Result<usize, ServerError> {
    if size > MAX_CATALOG_SIZE as usize {
        return Err(ServerError::ConfigError(format!(
            "CATALOG_SIZE must be at most {MAX_CATALOG_SIZE}, got {size}"
        )));
    }
    Ok(size)
}
