//! # Playdeck Config
//!
//! Configuration types for the Playdeck API, loaded from environment
//! variables.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`hasher`]: Credential hashing (pepper and bcrypt cost)
//! - [`server`]: Bind address and notification buffering
//!
//! Every config struct has a `from_env()` constructor and a `from_lookup()`
//! variant that takes the variable source as a closure, so tests never touch
//! the process environment.
//!
//! # Example
//!
//! ```ignore
//! use playdeck_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! ```

pub mod cors;
pub mod hasher;
pub mod server;

use std::str::FromStr;

pub use cors::CorsConfig;
pub use hasher::HasherConfig;
pub use server::ServerConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PASSWORD_PEPPER must be set when APP_ENV=production")]
    MissingPepper,

    #[error("PASSWORD_PEPPER is {length} bytes; at most 32 are allowed")]
    PepperTooLong { length: usize },

    #[error("invalid value `{value}` for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Deployment environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match read_var(&lookup, "APP_ENV") {
            None => Ok(Environment::Development),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "development" | "dev" | "local" => Ok(Environment::Development),
                "test" => Ok(Environment::Test),
                "production" | "prod" => Ok(Environment::Production),
                _ => Err(ConfigError::Invalid {
                    key: "APP_ENV",
                    value: raw,
                }),
            },
        }
    }

    #[must_use]
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Everything the server needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub hasher: HasherConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup)?;

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            cors: CorsConfig::from_lookup(&lookup),
            hasher: HasherConfig::from_lookup(environment, &lookup)?,
        })
    }
}

/// Reads a variable, treating blank values as unset.
pub(crate) fn read_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads and parses a variable. Unset is `Ok(None)`; unparseable is an error.
pub(crate) fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match read_var(lookup, key) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
