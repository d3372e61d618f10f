//! Layered configuration
//!
//! Values resolve from three sources, later ones winning: built-in defaults,
//! `./config.toml` in the working directory, and environment variables
//! carrying the `WORLDCUP_` prefix (`WORLDCUP_SERVICE_PORT=9000` overrides
//! `[service] port`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;

/// Top-level configuration tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    pub service: ServiceConfig,

    /// Dataset settings
    pub database: DatabaseConfig,

    /// Middleware knobs
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name reported in logs
    #[serde(default = "default_service_name")]
    pub name: String,

    /// TCP port the listener binds
    #[serde(default = "default_port")]
    pub port: u16,

    /// Filter directive handed to the tracing subscriber
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seconds before an in-flight request is abandoned
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Dataset settings
///
/// The dataset is a SQLite file opened read-only; the pool hands one
/// connection per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Location of the dataset file
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before giving up
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Acquire timeout as a [`Duration`]
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

/// Middleware knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Largest accepted request body, in megabytes
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// `permissive` or `restrictive`
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            cors_mode: default_cors_mode(),
        }
    }
}

fn default_service_name() -> String {
    "worldcup-api".into()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_database_path() -> PathBuf {
    PathBuf::from("data/worldcup.db")
}

fn default_max_connections() -> u32 {
    5
}

fn default_connection_timeout() -> u64 {
    10
}

fn default_body_limit_mb() -> usize {
    2
}

fn default_cors_mode() -> String {
    "permissive".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: default_service_name(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
            },
            database: DatabaseConfig {
                path: default_database_path(),
                max_connections: default_max_connections(),
                connection_timeout_secs: default_connection_timeout(),
            },
            middleware: MiddlewareConfig::default(),
        }
    }
}

impl Config {
    /// Resolve configuration from `./config.toml` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Resolve configuration reading a specific file instead of
    /// `./config.toml`
    ///
    /// A missing file is not an error; defaults and the environment still
    /// apply.
    pub fn load_from(path: &str) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("WORLDCUP_").split("_"))
            .extract()?;

        Ok(config)
    }
}
