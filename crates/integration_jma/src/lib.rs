//! JMA weather integration
//!
//! Client for the Japan Meteorological Agency bosai JSON endpoints
//! (<https://www.jma.go.jp/bosai>). Serves the area master document and
//! per-area forecasts without requiring an API key.

pub mod client;
mod models;

pub use client::{JmaApi, JmaClient, JmaConfig, JmaError};
pub use models::{AreaDocument, AreaEntry, AreaRef, ForecastArea, ForecastRecord, TimeSeriesData};
