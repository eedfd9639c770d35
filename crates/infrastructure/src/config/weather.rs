//! Weather (JMA) endpoint configuration.

use integration_jma::JmaConfig;
use serde::{Deserialize, Serialize};

/// JMA weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// bosai API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Area code used when a command does not name one
    #[serde(default = "default_area")]
    pub default_area: String,
}

fn default_base_url() -> String {
    "https://www.jma.go.jp/bosai".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_area() -> String {
    // Tokyo
    "130000".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            default_area: default_area(),
        }
    }
}

impl WeatherConfig {
    /// Convert to the integration client configuration
    #[must_use]
    pub fn to_jma_config(&self) -> JmaConfig {
        JmaConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
