//! Process configuration.
//!
//! Read once at startup from `DORMNET_*` environment variables and handed to
//! every division's `init_context` hook.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_DEBUG: &str = "DORMNET_DEBUG";
pub const ENV_BIND: &str = "DORMNET_BIND";
pub const ENV_FALLBACK_DIVISION: &str = "DORMNET_FALLBACK_DIVISION";
pub const ENV_SEED: &str = "DORMNET_SEED";
pub const ENV_LOG_FORMAT: &str = "DORMNET_LOG_FORMAT";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_FALLBACK_DIVISION: &str = "wu";
const DEBUG_FALLBACK_DIVISION: &str = "sample";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: expected a boolean, got `{value}`")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key}: expected a socket address, got `{value}`")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key}: expected `json` or `pretty`, got `{value}`")]
    InvalidLogFormat { key: &'static str, value: String },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Debug mode also registers debug-only divisions.
    pub debug: bool,
    pub bind_addr: SocketAddr,
    /// Division that address-based lookups fall back to. Defaults to `wu`, or
    /// to the debug-only `sample` division in debug mode.
    pub fallback_division: String,
    /// Optional JSON seed file for the in-memory account stores.
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            fallback_division: DEFAULT_FALLBACK_DIVISION.to_string(),
            seed_path: None,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = match lookup(ENV_DEBUG) {
            Some(v) => parse_bool(ENV_DEBUG, &v)?,
            None => false,
        };

        let bind_raw = lookup(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                key: ENV_BIND,
                value: bind_raw.clone(),
            })?;

        let fallback_division = lookup(ENV_FALLBACK_DIVISION)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default_fallback(debug).to_string());

        let seed_path = lookup(ENV_SEED)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(v) => match v.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::InvalidLogFormat {
                        key: ENV_LOG_FORMAT,
                        value: v,
                    });
                }
            },
            None => LogFormat::Json,
        };

        Ok(Self {
            debug,
            bind_addr,
            fallback_division,
            seed_path,
            log_format,
        })
    }
}

fn default_fallback(debug: bool) -> &'static str {
    if debug {
        DEBUG_FALLBACK_DIVISION
    } else {
        DEFAULT_FALLBACK_DIVISION
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
