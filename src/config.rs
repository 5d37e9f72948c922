//! Service configuration from environment variables (a `.env` file is honored by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "mobiles.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceConfig {
    /// SQLite file. `DATABASE_PATH`, default `mobiles.db`.
    pub database_path: PathBuf,
    /// `BIND_ADDR`, default `0.0.0.0:3000`.
    pub bind_addr: SocketAddr,
    /// Max request body size. `BODY_LIMIT_BYTES`, default 64 KiB.
    pub body_limit_bytes: usize,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_path = get("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "BODY_LIMIT_BYTES",
                value: raw,
            })?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        Ok(ServiceConfig {
            database_path,
            bind_addr,
            body_limit_bytes,
        })
    }
}
