/*
 * Responsibility
 * - Environment / .env loading (APP_ENV, LISTEN_ADDR / PORT, BODY_LIMIT_BYTES)
 * - Value validation (startup fails on malformed values)
 */
use std::fmt;

use crate::dispatch::DEFAULT_LISTEN_ADDR;
use crate::middleware::http::DEFAULT_BODY_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    /// `host:port`, or `:port` for all interfaces.
    pub listen_addr: String,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let app_env = AppEnv::parse(var("APP_ENV").as_deref());

        let listen_addr = match (var("LISTEN_ADDR"), var("PORT")) {
            (Some(addr), _) if !addr.trim().is_empty() => addr.trim().to_string(),
            (_, Some(port)) => {
                let port: u16 = port.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?;
                format!(":{port}")
            }
            _ => DEFAULT_LISTEN_ADDR.to_string(),
        };

        let body_limit_bytes = match var("BODY_LIMIT_BYTES") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("BODY_LIMIT_BYTES"))?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            app_env,
            listen_addr,
            body_limit_bytes,
        })
    }
}
