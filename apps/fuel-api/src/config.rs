//! Fuel API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

use fuel_core::{ConsumptionPolicy, UnknownPolicy};
use serde::Serialize;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Fuel API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Bind host (default: 0.0.0.0)
    pub host: String,

    /// HTTP port (default: 8080)
    pub port: u16,

    /// Consumption policy for stats and odometer checks
    pub policy: ConsumptionPolicy,

    /// CORS allowed origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            policy: ConsumptionPolicy::default(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        ServerConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host = lookup("FUEL_API_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("FUEL_API_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "FUEL_API_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let policy = match lookup("FUEL_CONSUMPTION_POLICY") {
            Some(raw) => raw.parse()?,
            None => defaults.policy,
        };

        let cors_origins = lookup("FUEL_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ServerConfig {
            host,
            port,
            policy,
            cors_origins,
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("Invalid value for FUEL_CONSUMPTION_POLICY: {0}")]
    InvalidPolicy(#[from] UnknownPolicy),
}
