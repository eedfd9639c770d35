//! SQLite-based snapshot persistence

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{NewWeatherRecord, SnapshotStorePort, StoredWeatherRecord},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::AreaCode;
use rusqlite::{Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based snapshot store
#[derive(Debug, Clone)]
pub struct SqliteWeatherStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteWeatherStore {
    /// Create a new SQLite snapshot store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: &Row) -> rusqlite::Result<StoredWeatherRecord> {
    let captured_at: String = row.get(8)?;
    let captured_at = DateTime::parse_from_rfc3339(&captured_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(StoredWeatherRecord {
        id: row.get(0)?,
        area_code: row.get(1)?,
        date: row.get(2)?,
        weather: row.get(3)?,
        wind: row.get(4)?,
        temperature_high: row.get(5)?,
        temperature_low: row.get(6)?,
        humidity: row.get(7)?,
        captured_at,
    })
}

#[async_trait]
impl SnapshotStorePort for SqliteWeatherStore {
    #[instrument(skip(self, code, name), fields(area = %code))]
    async fn upsert_area(&self, code: &str, name: &str) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let code = code.to_string();
        let name = name.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            // Update in place so referencing weather rows survive re-capture
            conn.execute(
                "INSERT INTO areas (area_code, area_name) VALUES (?1, ?2)
                 ON CONFLICT(area_code) DO UPDATE SET area_name = excluded.area_name",
                params![code, name],
            )
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            debug!("Upserted area");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, record), fields(area = %record.area_code, date = %record.date))]
    async fn insert_record(&self, record: &NewWeatherRecord) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let record = record.clone();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            conn.execute(
                "INSERT INTO weather_records (
                    area_code, date, weather, wind,
                    temperature_high, temperature_low, humidity, captured_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    record.area_code,
                    record.date,
                    record.weather,
                    record.wind,
                    record.temperature_high,
                    record.temperature_low,
                    record.humidity,
                    record.captured_at.to_rfc3339(),
                ],
            )
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            debug!("Inserted weather record");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(area = %area))]
    async fn records_on(
        &self,
        area: &AreaCode,
        date: &str,
    ) -> Result<Vec<StoredWeatherRecord>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let area = area.to_string();
        let date = date.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, area_code, date, weather, wind,
                        temperature_high, temperature_low, humidity, captured_at
                     FROM weather_records
                     WHERE area_code = ?1 AND date = ?2
                     ORDER BY id ASC",
                )
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let records = stmt
                .query_map(params![area, date], row_to_record)
                .map_err(|e| ApplicationError::Storage(e.to_string()))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            Ok(records)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
