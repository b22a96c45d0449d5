//! Load settings from the process environment, after reading an optional `.env` file.

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl Settings {
    /// A missing `.env` is fine; missing required variables are not.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let url = get("DATABASE_URL");
        let required = |key: &'static str| match (&url, get(key)) {
            (_, Some(v)) => Ok(v),
            (Some(_), None) => Ok(String::new()),
            (None, None) => Err(ConfigError::Missing(key)),
        };

        let database = DatabaseSettings {
            host: get("DATABASE_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.into()),
            port: parse_or("DATABASE_PORT", get("DATABASE_PORT"), DEFAULT_DB_PORT)?,
            user: required("DATABASE_USER")?,
            password: get("DATABASE_PASSWORD").unwrap_or_default(),
            name: required("DATABASE_NAME")?,
            max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            url,
        };
        Ok(Settings {
            database,
            listen_port: parse_or("PORT", get("PORT"), DEFAULT_LISTEN_PORT)?,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
