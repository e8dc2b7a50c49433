use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db?mode=rwc";
const DEFAULT_PORT: u16 = 1323;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_FILTER: &str = "todo_api=debug,tower=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is invalid: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Answer zero-row lookups with 404 instead of the generic 500.
    pub strict_not_found: bool,
    pub log_filter: String,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn new_from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value })?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value,
                    });
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let strict_not_found = match lookup("STRICT_NOT_FOUND") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: "STRICT_NOT_FOUND",
                value,
            })?,
            None => false,
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            strict_not_found,
            log_filter,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
