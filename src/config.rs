//! Configuration management for the Dobrovol discovery engine

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Tunables for the landing-view categorization.
#[derive(Debug, Deserialize, Clone)]
pub struct BucketConfig {
    /// A named bucket is suppressed below this many qualifying events.
    pub min_population: usize,
    /// Events shown in the compact horizontal row.
    pub preview_len: usize,
    /// Upper bound (exclusive) on `distance` for "Closest to you".
    pub nearby_distance_max: f64,
    /// Lower bound (inclusive) on `price` for "Many points".
    pub many_points_min: i64,
}

/// Tunables for the "recent searches" log.
#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    pub max_entries: usize,
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub buckets: BucketConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Pick up a .env file when the host shell ships one
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix DOBROVOL_)
            .add_source(
                Environment::with_prefix("DOBROVOL")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            min_population: 5,
            preview_len: 5,
            nearby_distance_max: 10.0,
            many_points_min: 50,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: 3,
            storage_key: "dobrovol.search_history".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
