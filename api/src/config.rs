use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Where vehicles are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::InvalidBackend(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set for the postgres store backend")]
    MissingDatabaseUrl,

    #[error("Unknown STORE_BACKEND '{0}' (expected 'postgres' or 'memory')")]
    InvalidBackend(String),

    #[error("Invalid PORT '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Only read when `store_backend` is `Postgres`
    pub database_url: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store_backend = match var("STORE_BACKEND") {
            Some(s) => s.parse()?,
            None => StoreBackend::Postgres,
        };

        let database_url = var("DATABASE_URL");
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        let port = match var("PORT") {
            Some(p) => p.parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => 8080,
        };

        Ok(Self {
            store_backend,
            database_url,
            port,
        })
    }
}
