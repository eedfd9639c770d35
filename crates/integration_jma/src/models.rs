//! Wire models for the JMA bosai JSON documents
//!
//! Shapes follow the published documents verbatim; every list and optional
//! field defaults to empty so a sparse payload still deserializes.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The area master document: one flat mapping per drill-down tier
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaDocument {
    /// Region tier (e.g. 010300 関東甲信地方)
    #[serde(default)]
    pub centers: BTreeMap<String, AreaEntry>,
    /// Prefecture tier (e.g. 130000 東京都)
    #[serde(default)]
    pub offices: BTreeMap<String, AreaEntry>,
    /// Sub-area tier (e.g. 130010 東京地方)
    #[serde(default)]
    pub class10s: BTreeMap<String, AreaEntry>,
}

/// One code entry within a tier mapping
#[derive(Debug, Clone, Deserialize)]
pub struct AreaEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub parent: Option<String>,
}

/// One record of the forecast document
///
/// The endpoint returns an array; element 0 is the short-range forecast the
/// drill-down consumes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    #[serde(default)]
    pub publishing_office: Option<String>,
    #[serde(default)]
    pub report_datetime: Option<String>,
    #[serde(default)]
    pub time_series: Vec<TimeSeriesData>,
}

/// One forecast span: timestamps plus per-area values
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesData {
    #[serde(default)]
    pub time_defines: Vec<String>,
    #[serde(default)]
    pub areas: Vec<ForecastArea>,
}

/// Weather values for one area within a span
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastArea {
    pub area: AreaRef,
    #[serde(default)]
    pub weathers: Vec<String>,
    #[serde(default)]
    pub winds: Vec<String>,
    #[serde(default)]
    pub temps: Vec<String>,
    #[serde(default)]
    pub humidity: Option<i64>,
}

/// Code and name of the area a span entry belongs to
#[derive(Debug, Clone, Deserialize)]
pub struct AreaRef {
    pub code: String,
    #[serde(default)]
    pub name: String,
}
