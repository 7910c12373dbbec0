//! HTTP server configuration.
//!
//! # Environment Variables
//!
//! - `SERVER_HOST`: Bind address (default: "0.0.0.0")
//! - `SERVER_PORT`: Bind port (default: 3000)
//! - `NOTIFICATION_CAPACITY`: Buffered game notifications per subscriber
//!   before slow subscribers start skipping (default: 256)

use crate::{ConfigError, parse_var};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub notification_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let notification_capacity: usize =
            parse_var(&lookup, "NOTIFICATION_CAPACITY")?.unwrap_or(DEFAULT_NOTIFICATION_CAPACITY);
        if notification_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "NOTIFICATION_CAPACITY",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host: lookup("SERVER_HOST")
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "SERVER_PORT")?.unwrap_or(DEFAULT_PORT),
            notification_capacity,
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
