//! JMA adapter - Implements WeatherPort using integration_jma

use std::collections::BTreeMap;

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use chrono::Utc;
use domain::{AreaCode, AreaNode, AreaTaxonomy, AreaWeather, ForecastSnapshot, TimeSeriesEntry};
use integration_jma::{
    AreaDocument, AreaEntry, ForecastRecord, JmaApi, JmaClient, JmaConfig, JmaError,
    TimeSeriesData,
};
use tracing::{debug, instrument};

/// Adapter for weather data using the JMA bosai API
pub struct JmaWeatherAdapter {
    client: JmaClient,
}

impl std::fmt::Debug for JmaWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JmaWeatherAdapter")
            .field("client", &"JmaClient")
            .finish()
    }
}

impl JmaWeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client =
            JmaClient::with_defaults().map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: JmaConfig) -> Result<Self, ApplicationError> {
        let client =
            JmaClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration errors to application errors
    fn map_error(err: JmaError) -> ApplicationError {
        match err {
            JmaError::ConnectionFailed(e)
            | JmaError::RequestFailed(e)
            | JmaError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            JmaError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    /// Convert the wire area document into the domain taxonomy
    fn map_taxonomy(doc: AreaDocument) -> AreaTaxonomy {
        AreaTaxonomy::new(
            Self::map_tier(doc.centers),
            Self::map_tier(doc.offices),
            Self::map_tier(doc.class10s),
        )
    }

    fn map_tier(entries: BTreeMap<String, AreaEntry>) -> BTreeMap<String, AreaNode> {
        entries
            .into_iter()
            .map(|(code, entry)| {
                (
                    code,
                    AreaNode {
                        name: entry.name,
                        children: entry.children,
                    },
                )
            })
            .collect()
    }

    /// Build a snapshot from the first forecast record
    ///
    /// An empty document yields an empty snapshot; the caller decides how to
    /// degrade.
    fn map_snapshot(area: &AreaCode, records: Vec<ForecastRecord>) -> ForecastSnapshot {
        let first = records.into_iter().next();

        ForecastSnapshot {
            area_code: area.clone(),
            captured_at: Utc::now(),
            publishing_office: first.as_ref().and_then(|r| r.publishing_office.clone()),
            report_datetime: first.as_ref().and_then(|r| r.report_datetime.clone()),
            time_series: first
                .map(|r| r.time_series.into_iter().map(Self::map_span).collect())
                .unwrap_or_default(),
        }
    }

    fn map_span(span: TimeSeriesData) -> TimeSeriesEntry {
        TimeSeriesEntry {
            time_defines: span.time_defines,
            areas: span
                .areas
                .into_iter()
                .map(|area| AreaWeather {
                    area_code: area.area.code,
                    area_name: area.area.name,
                    weathers: area.weathers,
                    winds: area.winds,
                    temps: area.temps,
                    humidity: area.humidity,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl WeatherPort for JmaWeatherAdapter {
    #[instrument(skip(self))]
    async fn area_taxonomy(&self) -> Result<AreaTaxonomy, ApplicationError> {
        let result = self.client.area_master().await.map_err(Self::map_error);

        match &result {
            Ok(doc) => debug!(centers = doc.centers.len(), "Retrieved area master"),
            Err(e) => debug!(error = %e, "Failed to get area master"),
        }

        result.map(Self::map_taxonomy)
    }

    #[instrument(skip(self), fields(area = %area))]
    async fn forecast(&self, area: &AreaCode) -> Result<ForecastSnapshot, ApplicationError> {
        let result = self
            .client
            .forecast(area.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(records) => debug!(records = records.len(), "Retrieved forecast"),
            Err(e) => debug!(error = %e, "Failed to get forecast"),
        }

        result.map(|records| Self::map_snapshot(area, records))
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
