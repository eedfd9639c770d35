//! Entities - immutable aggregates with behavior

pub mod area;
pub mod forecast;

pub use area::{AreaNode, AreaSummary, AreaTaxonomy};
pub use forecast::{AreaWeather, ForecastSnapshot, NormalizedForecast, TimeSeriesEntry};
