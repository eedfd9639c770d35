//! Application services

pub mod area_browser;
pub mod forecast_service;
pub mod snapshot_service;

pub use area_browser::{AreaBrowserService, AreaListEntry, AreaListView};
pub use forecast_service::{ForecastDetails, ForecastService, ForecastView};
pub use snapshot_service::{CaptureReport, SnapshotService};
