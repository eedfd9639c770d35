//! SQLite connection pooling
//!
//! Every connection the pool opens runs the same init batch, so foreign key
//! enforcement and the busy timeout hold no matter which pooled connection
//! ends up serving a request.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Pooled connection type alias
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

// foreign_keys and busy_timeout are per-connection settings, so the batch
// runs on every connection, not just the first
const INIT_PRAGMAS: &str = "
    PRAGMA foreign_keys = ON;
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA busy_timeout = 5000;
";

/// Open the database and build the connection pool
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(
        path = %config.path,
        max_connections = config.max_connections,
        "Opening database"
    );

    let manager = if config.is_in_memory() {
        SqliteConnectionManager::memory()
    } else {
        ensure_parent_dir(&config.path)?;
        SqliteConnectionManager::file(&config.path)
    }
    .with_init(|conn| conn.execute_batch(INIT_PRAGMAS));

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;

    if config.run_migrations {
        let conn = pool.get()?;
        super::migrations::run_migrations(&conn)?;
    }

    debug!("Connection pool ready");
    Ok(pool)
}

fn ensure_parent_dir(path: &str) -> Result<(), DatabaseError> {
    let Some(parent) = Path::new(path).parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(parent)
        .map_err(|e| DatabaseError::Migration(format!("Cannot create database directory: {e}")))
}
