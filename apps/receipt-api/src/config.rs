//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! The defaults alone give the reference behavior: listen on port 3000.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default JSON body limit (256 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Largest accepted JSON body in bytes
    pub max_body_bytes: usize,

    /// Worker thread count; `None` lets actix use one per core
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let config = ServerConfig {
            host: lookup("RECEIPT_API_HOST").unwrap_or(defaults.host),

            port: parse_or(&lookup, "RECEIPT_API_PORT", defaults.port)?,

            max_body_bytes: parse_or(
                &lookup,
                "RECEIPT_API_MAX_BODY_BYTES",
                defaults.max_body_bytes,
            )?,

            workers: lookup("RECEIPT_API_WORKERS")
                .map(|raw| parse_value("RECEIPT_API_WORKERS", &raw))
                .transpose()?,
        };

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("RECEIPT_API_MAX_BODY_BYTES".to_string()));
        }

        if config.workers == Some(0) {
            return Err(ConfigError::InvalidValue("RECEIPT_API_WORKERS".to_string()));
        }

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => parse_value(name, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_listen_on_3000() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.workers, None);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("RECEIPT_API_HOST", "127.0.0.1"),
            ("RECEIPT_API_PORT", "8080"),
            ("RECEIPT_API_MAX_BODY_BYTES", "1024"),
            ("RECEIPT_API_WORKERS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.workers, Some(2));
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup_from(&[("RECEIPT_API_PORT", "http")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()));

        let err = ServerConfig::from_lookup(lookup_from(&[("RECEIPT_API_PORT", "70000")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_API_PORT");

        let err = ServerConfig::from_lookup(lookup_from(&[("RECEIPT_API_WORKERS", "0")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("RECEIPT_API_WORKERS".to_string()));

        let err =
            ServerConfig::from_lookup(lookup_from(&[("RECEIPT_API_MAX_BODY_BYTES", "0")]))
                .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue("RECEIPT_API_MAX_BODY_BYTES".to_string())
        );
    }
}
