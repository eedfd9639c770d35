//! Application configuration
//!
//! Loaded from an optional `config.toml` in the working directory plus
//! `TENKI_`-prefixed environment overrides (e.g. `TENKI_DATABASE_PATH`).

mod database;
mod weather;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use weather::WeatherConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather (JMA) endpoint settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// SQLite database settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., TENKI_DATABASE_PATH)
            .add_source(
                config::Environment::with_prefix("TENKI")
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
