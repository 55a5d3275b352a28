//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file backing the persistent store
    pub storage_path: PathBuf,
    /// Stopwatch display refresh interval in milliseconds
    pub tick_interval_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All settings have defaults, so a bare environment works.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let tick_interval_ms = match env::var("TICK_INTERVAL_MS") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("TICK_INTERVAL_MS"))?,
            Err(_) => 16, // ~60 Hz display refresh
        };

        Ok(Self {
            storage_path: env::var("STORAGE_PATH")
                .unwrap_or_else(|_| "data/fitdesk.json".to_string())
                .into(),
            tick_interval_ms,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            storage_path: "data/fitdesk-test.json".into(),
            tick_interval_ms: 16,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
