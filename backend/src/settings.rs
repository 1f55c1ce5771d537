//! Process configuration loaded via OrthoConfig.
//!
//! Values come from `RSVP_*` environment variables (and matching CLI flags).
//! The database URL has no default: a process without one cannot serve any
//! request, so [`AppSettings::database_url`] reports its absence as an error.

use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Configuration errors raised at start-up.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `RSVP_DATABASE_URL` is unset or blank.
    #[error("RSVP_DATABASE_URL must be set to a PostgreSQL connection string")]
    MissingDatabaseUrl,
    /// `RSVP_HOST` is not an IP address.
    #[error("RSVP_HOST is not a valid IP address: {value}")]
    InvalidHost { value: String },
    /// Settings could not be read.
    #[error("failed to load settings: {message}")]
    Load { message: String },
}

/// Service settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RSVP")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Address to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// Port to bind; defaults to 8080.
    pub port: Option<u16>,
    /// Maximum pooled connections; defaults to 10.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Record Prometheus request metrics and serve `GET /metrics`.
    #[ortho_config(default = true)]
    pub metrics: bool,
}

impl AppSettings {
    /// Load settings from the environment, ignoring process arguments.
    pub fn load_from_env(binary: &str) -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(binary)]).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Return the configured database URL.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Return the socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidHost {
                value: raw.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Return the connection pool configuration.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let max_size = self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE);
        Ok(PoolConfig::new(self.database_url()?).with_max_size(max_size))
    }
}
