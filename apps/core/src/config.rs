//! Runtime configuration loaded from the environment.
//!
//! Every key has a development default, so the server starts with no `.env`
//! at all. Malformed values fail startup instead of being silently ignored.

use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Environment-derived settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// SQLite database location.
    pub database_url: String,
    /// Chat requests allowed per character within `chat_rate_window`.
    pub chat_rate_limit: usize,
    /// Sliding window for the chat throttle.
    pub chat_rate_window: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            database_url: "sqlite://zchat.sqlite".to_string(),
            chat_rate_limit: 20,
            chat_rate_window: Duration::from_secs(60),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, keeping defaults for unset
    /// keys.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(addr) = env::var("ZCHAT_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = env::var("ZCHAT_DATABASE_URL") {
            config.database_url = url;
        }
        if let Ok(raw) = env::var("ZCHAT_CHAT_RATE_LIMIT") {
            config.chat_rate_limit = raw.parse().map_err(|_| {
                AppError::Config(format!(
                    "ZCHAT_CHAT_RATE_LIMIT must be a positive integer, got '{raw}'"
                ))
            })?;
        }
        if let Ok(raw) = env::var("ZCHAT_CHAT_RATE_WINDOW_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                AppError::Config(format!(
                    "ZCHAT_CHAT_RATE_WINDOW_SECS must be a positive integer, got '{raw}'"
                ))
            })?;
            config.chat_rate_window = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset(
            [
                "ZCHAT_BIND_ADDR",
                "ZCHAT_DATABASE_URL",
                "ZCHAT_CHAT_RATE_LIMIT",
                "ZCHAT_CHAT_RATE_WINDOW_SECS",
            ],
            || {
                let config = AppConfig::from_env().expect("defaults must load");
                assert_eq!(config.bind_addr, "127.0.0.1:8080");
                assert_eq!(config.chat_rate_limit, 20);
                assert_eq!(config.chat_rate_window, Duration::from_secs(60));
            },
        );
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            [
                ("ZCHAT_BIND_ADDR", Some("0.0.0.0:9090")),
                ("ZCHAT_CHAT_RATE_LIMIT", Some("5")),
                ("ZCHAT_CHAT_RATE_WINDOW_SECS", Some("10")),
            ],
            || {
                let config = AppConfig::from_env().expect("overrides must load");
                assert_eq!(config.bind_addr, "0.0.0.0:9090");
                assert_eq!(config.chat_rate_limit, 5);
                assert_eq!(config.chat_rate_window, Duration::from_secs(10));
            },
        );
    }

    #[test]
    fn test_malformed_limit_fails() {
        temp_env::with_var("ZCHAT_CHAT_RATE_LIMIT", Some("many"), || {
            assert!(AppConfig::from_env().is_err());
        });
    }
}
