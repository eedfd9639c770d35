//! Embedded schema migrations
//!
//! The canonical schema lives in `migrations/*.sql` at the repository root;
//! the same statements are embedded here and applied on startup. A
//! `schema_version` table records the highest applied version.
//!
//! Adding a migration: create `migrations/VXXX__description.sql`, bump
//! [`SCHEMA_VERSION`], add the matching `migrate_vX` function, and call it
//! from [`run_migrations`].

use rusqlite::Connection;
use tracing::{debug, error, info};

use super::connection::DatabaseError;

/// Highest schema version this build knows about
const SCHEMA_VERSION: i32 = 1;

/// Bring the schema up to [`SCHEMA_VERSION`]
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let applied = current_version(conn)?;
    if applied >= SCHEMA_VERSION {
        debug!(version = applied, "Schema is up to date");
        return Ok(());
    }

    info!(
        from_version = applied,
        to_version = SCHEMA_VERSION,
        "Applying schema migrations"
    );

    if applied < 1 {
        migrate_v1(conn).inspect_err(|e| {
            error!(version = 1, error = %e, "Migration V001 (initial schema) failed");
        })?;
    }

    record_version(conn, SCHEMA_VERSION)?;
    info!(version = SCHEMA_VERSION, "Schema migrations complete");
    Ok(())
}

/// Highest version recorded in `schema_version`, 0 on a fresh database
fn current_version(conn: &Connection) -> Result<i32, DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
        [],
    )?;

    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    Ok(version)
}

fn record_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// V001: areas plus weather_records, see migrations/V001__initial_schema.sql
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Applying migration V001: Initial schema");

    conn.execute_batch(
        "
        -- Areas table
        CREATE TABLE IF NOT EXISTS areas (
            area_code TEXT PRIMARY KEY,
            area_name TEXT NOT NULL
        );

        -- Weather records table
        CREATE TABLE IF NOT EXISTS weather_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            area_code TEXT NOT NULL,
            date TEXT NOT NULL,
            weather TEXT,
            wind TEXT,
            temperature_high TEXT,
            temperature_low TEXT,
            humidity INTEGER,
            captured_at TEXT NOT NULL,
            FOREIGN KEY (area_code) REFERENCES areas(area_code)
        );

        -- Indexes
        CREATE INDEX IF NOT EXISTS idx_weather_records_area_date
            ON weather_records(area_code, date);
        CREATE INDEX IF NOT EXISTS idx_weather_records_captured
            ON weather_records(captured_at);
        ",
    )?;

    Ok(())
}
