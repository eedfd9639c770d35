//! SQLite persistence
//!
//! Connection pooling, embedded schema migrations, and the snapshot store.

pub mod connection;
pub mod migrations;
pub mod weather_store;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use weather_store::SqliteWeatherStore;
