//! Configuration management for the contact book server.
//!
//! This module handles loading and validating configuration from environment variables.
//! An optional `.env` file is loaded first; nothing is printed to stdout, which
//! carries the MCP protocol.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default page size when the caller omits one or passes a non-positive size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page size used when a request carries no usable size (default: 10)
    pub default_page_size: usize,

    /// Upper bound for requested page sizes (default: 100)
    pub max_page_size: usize,

    /// Largest accepted profile picture in bytes (default: 5 MiB)
    pub max_picture_bytes: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DEFAULT_PAGE_SIZE`: default page size (default: 10)
    /// - `CONTACTS_MAX_PAGE_SIZE`: largest page size served (default: 100)
    /// - `CONTACTS_MAX_PICTURE_BYTES`: profile picture size limit (default: 5242880)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let default_page_size =
            Self::parse_env_usize("CONTACTS_DEFAULT_PAGE_SIZE", defaults.default_page_size)?;
        let max_page_size = Self::parse_env_usize("CONTACTS_MAX_PAGE_SIZE", defaults.max_page_size)?;
        let max_picture_bytes =
            Self::parse_env_usize("CONTACTS_MAX_PICTURE_BYTES", defaults.max_picture_bytes)?;

        if default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DEFAULT_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        if max_page_size < default_page_size {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_MAX_PAGE_SIZE".to_string(),
                reason: format!(
                    "Must be at least the default page size ({})",
                    default_page_size
                ),
            });
        }

        if max_picture_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_MAX_PICTURE_BYTES".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            default_page_size,
            max_page_size,
            max_picture_bytes,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
            max_picture_bytes: 5 * 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}
