//! Snapshot store port
//!
//! Defines the interface for persisting forecast rows and reading them back
//! by exact (area code, date) match.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::AreaCode;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One forecast row ready for insertion
///
/// The denormalized projection of a single time series span and area pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWeatherRecord {
    /// Area the values belong to
    pub area_code: String,
    /// First timestamp of the originating span, verbatim ISO-8601
    pub date: String,
    /// Comma-joined weather descriptions, absent when the span had none
    pub weather: Option<String>,
    /// Comma-joined wind descriptions, absent when the span had none
    pub wind: Option<String>,
    /// Temperature at index 0 of the span's values
    pub temperature_high: Option<String>,
    /// Temperature at index 1 of the span's values
    pub temperature_low: Option<String>,
    /// Relative humidity percentage
    pub humidity: Option<i64>,
    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
}

/// A forecast row as stored, keyed by its surrogate id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWeatherRecord {
    /// Surrogate primary key
    pub id: i64,
    /// Area the values belong to
    pub area_code: String,
    /// First timestamp of the originating span, verbatim ISO-8601
    pub date: String,
    pub weather: Option<String>,
    pub wind: Option<String>,
    pub temperature_high: Option<String>,
    pub temperature_low: Option<String>,
    pub humidity: Option<i64>,
    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
}

/// Port for snapshot persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SnapshotStorePort: Send + Sync {
    /// Insert or replace one area row
    async fn upsert_area(&self, code: &str, name: &str) -> Result<(), ApplicationError>;

    /// Insert one forecast row
    async fn insert_record(&self, record: &NewWeatherRecord) -> Result<(), ApplicationError>;

    /// Exact-match lookup by area code and date string
    ///
    /// The date must equal the stored value byte for byte; no range or
    /// fuzzy matching.
    async fn records_on(
        &self,
        area: &AreaCode,
        date: &str,
    ) -> Result<Vec<StoredWeatherRecord>, ApplicationError>;
}
