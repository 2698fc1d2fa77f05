use std::{net::SocketAddr, str::FromStr};

use crate::server::error::config::ConfigError;

pub static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub static DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Runtime configuration read from environment variables
///
/// - `DATABASE_URL` (required): sea-orm connection string, e.g. `postgres://...` or `sqlite://reviews.db?mode=rwc`
/// - `LISTEN_ADDR` (default `0.0.0.0:8080`)
/// - `DATABASE_MAX_CONNECTIONS` (default `10`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(value) => parse_var("LISTEN_ADDR", &value)?,
            None => parse_var("LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => parse_var("DATABASE_MAX_CONNECTIONS", &value)?,
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        if database_max_connections == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url,
            listen_addr,
            database_max_connections,
        })
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
