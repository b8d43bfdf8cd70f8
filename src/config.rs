// src/config.rs
use std::env;
use thiserror::Error;

use crate::infrastructure::locale::SUPPORTED_LOCALES;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    locale: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://scrivener.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    8
}

fn default_locale() -> String {
    "en".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional;
    /// values that are present must be valid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(value) if value >= 1 => value,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                    )));
                }
            },
            None => default_max_connections(),
        };

        let locale = lookup("APP_LOCALE")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_else(default_locale);
        if !SUPPORTED_LOCALES.contains(&locale.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "APP_LOCALE '{locale}' is not one of {}",
                SUPPORTED_LOCALES.join(", ")
            )));
        }

        Ok(Self {
            database_url,
            database_max_connections,
            locale,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}
