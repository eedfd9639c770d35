//! Infrastructure layer - adapters for external systems
//!
//! Implements the ports defined in the application layer: JMA HTTP access
//! and SQLite persistence, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::JmaWeatherAdapter;
pub use config::{AppConfig, DatabaseConfig, WeatherConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteWeatherStore, create_pool};
