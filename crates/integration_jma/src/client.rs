//! JMA bosai API client
//!
//! HTTP client for the two endpoint families: the area master document and
//! per-area forecasts. One attempt per call; callers treat any error as
//! "no data available".

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{AreaDocument, ForecastRecord};

/// JMA client errors
#[derive(Debug, Error)]
pub enum JmaError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service returned a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// JMA endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JmaConfig {
    /// bosai API base URL (default: <https://www.jma.go.jp/bosai>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://www.jma.go.jp/bosai".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for JmaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for the two JMA endpoint families
#[async_trait]
pub trait JmaApi: Send + Sync {
    /// Fetch the area master document
    async fn area_master(&self) -> Result<AreaDocument, JmaError>;

    /// Fetch the forecast document for one area code
    async fn forecast(&self, area_code: &str) -> Result<Vec<ForecastRecord>, JmaError>;

    /// Check if the service is reachable
    async fn is_healthy(&self) -> bool;
}

/// HTTP client implementation against the bosai endpoints
#[derive(Debug)]
pub struct JmaClient {
    client: Client,
    config: JmaConfig,
}

impl JmaClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: JmaConfig) -> Result<Self, JmaError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| JmaError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, JmaError> {
        Self::new(JmaConfig::default())
    }

    /// URL of the area master document
    fn area_url(&self) -> String {
        format!("{}/common/const/area.json", self.config.base_url)
    }

    /// URL of the forecast document for one area
    fn forecast_url(&self, area_code: &str) -> String {
        format!(
            "{}/forecast/data/forecast/{area_code}.json",
            self.config.base_url
        )
    }

    /// Single-attempt GET returning parsed JSON
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, JmaError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| JmaError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(JmaError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(JmaError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| JmaError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl JmaApi for JmaClient {
    #[instrument(skip(self))]
    async fn area_master(&self) -> Result<AreaDocument, JmaError> {
        let url = self.area_url();
        debug!(url = %url, "Fetching area master");
        self.get_json(&url).await
    }

    #[instrument(skip(self), fields(area = %area_code))]
    async fn forecast(&self, area_code: &str) -> Result<Vec<ForecastRecord>, JmaError> {
        let url = self.forecast_url(area_code);
        debug!(url = %url, "Fetching forecast");
        self.get_json(&url).await
    }

    async fn is_healthy(&self) -> bool {
        self.area_master().await.is_ok()
    }
}
