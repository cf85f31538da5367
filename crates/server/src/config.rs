//! Server configuration from the environment

use std::env;
use thiserror::Error;
use trend_facade::{NonFinitePolicy, TrendConfig};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),

    #[error("FORECAST_NON_FINITE: {0}")]
    InvalidPolicy(String),
}

/// Runtime settings of the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub trend: TrendConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            trend: TrendConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `FORECAST_NON_FINITE` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = get("HOST").unwrap_or(defaults.host);
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let non_finite = match get("FORECAST_NON_FINITE") {
            Some(raw) => raw
                .parse::<NonFinitePolicy>()
                .map_err(ConfigError::InvalidPolicy)?,
            None => defaults.trend.non_finite,
        };

        Ok(Self {
            host,
            port,
            trend: TrendConfig::new(non_finite),
        })
    }
}
