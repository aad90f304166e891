use std::{net::SocketAddr, str::FromStr};

use crate::server::{
    error::{config::ConfigError, AppError},
    infra::InfraBackend,
};

const DEFAULT_DATABASE_URL: &str = "sqlite://./vm_lifecycle.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_APP_NAME: &str = "Server Lifecycle API";
const DEFAULT_APP_ENV: &str = "development";

/// Output format of the process-wide tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            _ => Err("expected 'json' or 'text'".to_string()),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    pub app_name: String,
    pub app_version: String,
    pub app_env: String,

    pub debug: bool,
    pub log_format: LogFormat,

    pub infra_backend: InfraBackend,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Every variable is optional; unset variables take their default and set but
    /// unusable values fail with `ConfigError`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let bind_addr = var("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", &bind_addr, e.to_string()))?;

        let debug = match lookup("DEBUG") {
            None => false,
            Some(value) => parse_bool(&value).ok_or_else(|| {
                invalid("DEBUG", &value, "expected 'true' or 'false'".to_string())
            })?,
        };

        let log_format = match lookup("LOG_FORMAT") {
            None => LogFormat::default(),
            Some(value) => value
                .parse::<LogFormat>()
                .map_err(|reason| invalid("LOG_FORMAT", &value, reason))?,
        };

        let infra_backend = match lookup("INFRA_BACKEND") {
            None => InfraBackend::default(),
            Some(value) => value.parse::<InfraBackend>()?,
        };

        Ok(Self {
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr,
            app_name: var("APP_NAME", DEFAULT_APP_NAME),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            app_env: var("APP_ENV", DEFAULT_APP_ENV),
            debug,
            log_format,
            infra_backend,
        })
    }
}

fn invalid(name: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
