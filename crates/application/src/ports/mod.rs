//! Ports - async interfaces implemented by infrastructure adapters

pub mod snapshot_store;
pub mod weather_port;

pub use snapshot_store::{NewWeatherRecord, SnapshotStorePort, StoredWeatherRecord};
pub use weather_port::WeatherPort;
