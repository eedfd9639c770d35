//! Snapshot capture and history lookup
//!
//! Projects a fetched forecast into relational rows, one per time series
//! span and area pair. A failed fetch yields an empty report, a failed row
//! write is logged and skipped; the run never aborts.

use std::collections::BTreeMap;
use std::sync::Arc;

use domain::{AreaCode, ForecastSnapshot};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{NewWeatherRecord, SnapshotStorePort, StoredWeatherRecord, WeatherPort};

/// Outcome of one capture run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureReport {
    /// Area the capture was issued for
    pub area_code: String,
    /// Whether the forecast fetch itself succeeded
    pub fetched: bool,
    /// Distinct areas upserted from the snapshot
    pub areas_recorded: usize,
    /// Forecast rows written
    pub rows_written: usize,
    /// Forecast rows skipped after a write failure
    pub rows_skipped: usize,
}

/// Captures forecast snapshots into the store and reads them back
pub struct SnapshotService {
    weather: Arc<dyn WeatherPort>,
    store: Arc<dyn SnapshotStorePort>,
}

impl std::fmt::Debug for SnapshotService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotService").finish_non_exhaustive()
    }
}

impl SnapshotService {
    /// Create a snapshot service over the given port implementations
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>, store: Arc<dyn SnapshotStorePort>) -> Self {
        Self { weather, store }
    }

    /// Fetch a forecast for `area` and persist it
    ///
    /// One area's failure never affects another capture run; every failure
    /// is absorbed into the report.
    #[instrument(skip(self), fields(area = %area))]
    pub async fn capture(&self, area: &AreaCode) -> CaptureReport {
        let snapshot = match self.weather.forecast(area).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "forecast fetch failed, nothing captured");
                return CaptureReport {
                    area_code: area.to_string(),
                    fetched: false,
                    areas_recorded: 0,
                    rows_written: 0,
                    rows_skipped: 0,
                };
            }
        };

        let areas_recorded = self.record_areas(&snapshot).await;

        let mut rows_written = 0;
        let mut rows_skipped = 0;
        for record in Self::project(&snapshot) {
            match self.store.insert_record(&record).await {
                Ok(()) => rows_written += 1,
                Err(e) => {
                    warn!(error = %e, area = %record.area_code, date = %record.date, "skipping weather record");
                    rows_skipped += 1;
                }
            }
        }

        info!(rows_written, rows_skipped, "capture finished");
        CaptureReport {
            area_code: area.to_string(),
            fetched: true,
            areas_recorded,
            rows_written,
            rows_skipped,
        }
    }

    /// Stored rows for `area` on an exact date string
    #[instrument(skip(self), fields(area = %area))]
    pub async fn history(
        &self,
        area: &AreaCode,
        date: &str,
    ) -> Result<Vec<StoredWeatherRecord>, ApplicationError> {
        self.store.records_on(area, date).await
    }

    /// Upsert every distinct area appearing in the snapshot
    async fn record_areas(&self, snapshot: &ForecastSnapshot) -> usize {
        let mut names = BTreeMap::new();
        for entry in &snapshot.time_series {
            for area in &entry.areas {
                names
                    .entry(area.area_code.clone())
                    .or_insert_with(|| area.area_name.clone());
            }
        }

        let mut recorded = 0;
        for (code, name) in names {
            match self.store.upsert_area(&code, &name).await {
                Ok(()) => recorded += 1,
                Err(e) => warn!(error = %e, area = %code, "skipping area upsert"),
            }
        }
        recorded
    }

    /// One row per (time series span, area) pair
    ///
    /// Spans without any time define cannot be keyed by date and are
    /// dropped.
    fn project(snapshot: &ForecastSnapshot) -> Vec<NewWeatherRecord> {
        let mut rows = Vec::new();
        for entry in &snapshot.time_series {
            let Some(date) = entry.time_defines.first() else {
                continue;
            };
            for area in &entry.areas {
                rows.push(NewWeatherRecord {
                    area_code: area.area_code.clone(),
                    date: date.clone(),
                    weather: join_nonempty(&area.weathers),
                    wind: join_nonempty(&area.winds),
                    temperature_high: area.temps.first().cloned(),
                    temperature_low: area.temps.get(1).cloned(),
                    humidity: area.humidity,
                    captured_at: snapshot.captured_at,
                });
            }
        }
        rows
    }
}

fn join_nonempty(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
