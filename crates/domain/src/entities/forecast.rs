//! Forecast snapshot and normalization
//!
//! A snapshot is the immutable result of one forecast fetch; nothing is
//! merged against prior data. Normalization extracts the fixed
//! weather/high/low shape from the variably populated payload, substituting
//! the documented fallback wherever a value is missing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fallback::{first_or_unknown, nth_or_unknown};
use crate::value_objects::AreaCode;

/// Weather values reported for a single area within one time span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaWeather {
    /// Code of the area these values belong to
    pub area_code: String,
    /// Display name of the area
    pub area_name: String,
    /// Weather descriptions, index-aligned with the span's time defines
    pub weathers: Vec<String>,
    /// Wind descriptions, index-aligned with the span's time defines
    pub winds: Vec<String>,
    /// Temperature values; by convention index 0 is the high, index 1 the low
    pub temps: Vec<String>,
    /// Relative humidity percentage, when the source supplies one
    pub humidity: Option<i64>,
}

/// One forecast span: a set of timestamps and per-area values for that span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesEntry {
    /// ISO-8601 timestamps, kept verbatim so stored dates match exactly
    pub time_defines: Vec<String>,
    /// Weather values per area for this span
    pub areas: Vec<AreaWeather>,
}

/// The immutable result of one forecast fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    /// Area code the fetch was issued for
    pub area_code: AreaCode,
    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
    /// Office that published the forecast, when reported
    pub publishing_office: Option<String>,
    /// Publication timestamp of the forecast, when reported
    pub report_datetime: Option<String>,
    /// Forecast spans of the first forecast record, in document order
    pub time_series: Vec<TimeSeriesEntry>,
}

/// The fixed, defaulted shape extracted from a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedForecast {
    /// First weather description, or the fallback literal
    pub weather: String,
    /// Temperature at index 0, or the fallback literal
    pub temperature_high: String,
    /// Temperature at index 1, or the fallback literal
    pub temperature_low: String,
    /// Wind descriptions as reported
    pub winds: Vec<String>,
}

impl NormalizedForecast {
    /// Winds as one comma-joined string, for persistence and compact display
    #[must_use]
    pub fn wind_summary(&self) -> String {
        self.winds.join(", ")
    }
}

impl ForecastSnapshot {
    /// Whether the snapshot carries no forecast spans at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time_series.is_empty()
    }

    /// Extract the fixed weather/high/low shape for `code`
    ///
    /// Looks at the first forecast span only and matches the area by exact
    /// code equality. Returns `None` when the snapshot has no spans or none
    /// of the first span's areas carries the requested code; missing values
    /// inside a matched area degrade to the fallback literal instead.
    #[must_use]
    pub fn normalized(&self, code: &AreaCode) -> Option<NormalizedForecast> {
        let entry = self.time_series.first()?;
        let area = entry.areas.iter().find(|a| a.area_code == code.as_str())?;

        Some(NormalizedForecast {
            weather: first_or_unknown(&area.weathers),
            temperature_high: nth_or_unknown(&area.temps, 0),
            temperature_low: nth_or_unknown(&area.temps, 1),
            winds: area.winds.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::UNKNOWN;

    fn tokyo() -> AreaCode {
        AreaCode::new("130000").expect("valid code")
    }

    fn area_weather(code: &str, weathers: &[&str], temps: &[&str]) -> AreaWeather {
        AreaWeather {
            area_code: code.to_string(),
            area_name: "東京地方".to_string(),
            weathers: weathers.iter().map(ToString::to_string).collect(),
            winds: vec!["北の風".to_string(), "南の風".to_string()],
            temps: temps.iter().map(ToString::to_string).collect(),
            humidity: None,
        }
    }

    fn snapshot_with(areas: Vec<AreaWeather>) -> ForecastSnapshot {
        ForecastSnapshot {
            area_code: tokyo(),
            captured_at: Utc::now(),
            publishing_office: Some("気象庁".to_string()),
            report_datetime: Some("2024-12-04T17:00:00+09:00".to_string()),
            time_series: vec![TimeSeriesEntry {
                time_defines: vec!["2024-12-04T17:00:00+09:00".to_string()],
                areas,
            }],
        }
    }

    #[test]
    fn normalizes_populated_area() {
        let snapshot = snapshot_with(vec![area_weather("130000", &["晴れ"], &["19", "9"])]);
        let normalized = snapshot.normalized(&tokyo()).expect("matching area");

        assert_eq!(normalized.weather, "晴れ");
        assert_eq!(normalized.temperature_high, "19");
        assert_eq!(normalized.temperature_low, "9");
        assert_eq!(normalized.wind_summary(), "北の風, 南の風");
    }

    #[test]
    fn empty_lists_degrade_to_unknown() {
        let snapshot = snapshot_with(vec![area_weather("130000", &[], &[])]);
        let normalized = snapshot.normalized(&tokyo()).expect("matching area");

        assert_eq!(normalized.weather, UNKNOWN);
        assert_eq!(normalized.temperature_high, UNKNOWN);
        assert_eq!(normalized.temperature_low, UNKNOWN);
    }

    #[test]
    fn single_temperature_pads_low_only() {
        let snapshot = snapshot_with(vec![area_weather("130000", &["くもり"], &["19"])]);
        let normalized = snapshot.normalized(&tokyo()).expect("matching area");

        assert_eq!(normalized.temperature_high, "19");
        assert_eq!(normalized.temperature_low, UNKNOWN);
    }

    #[test]
    fn no_matching_area_yields_none() {
        let snapshot = snapshot_with(vec![area_weather("140000", &["晴れ"], &["19", "9"])]);
        assert!(snapshot.normalized(&tokyo()).is_none());
    }

    #[test]
    fn empty_snapshot_yields_none() {
        let snapshot = ForecastSnapshot {
            area_code: tokyo(),
            captured_at: Utc::now(),
            publishing_office: None,
            report_datetime: None,
            time_series: Vec::new(),
        };

        assert!(snapshot.is_empty());
        assert!(snapshot.normalized(&tokyo()).is_none());
    }

    #[test]
    fn only_first_span_is_consulted() {
        let mut snapshot = snapshot_with(vec![area_weather("140000", &["晴れ"], &[])]);
        snapshot.time_series.push(TimeSeriesEntry {
            time_defines: vec!["2024-12-05T00:00:00+09:00".to_string()],
            areas: vec![area_weather("130000", &["雨"], &["12", "8"])],
        });

        // 130000 only appears in the second span, so normalization misses
        assert!(snapshot.normalized(&tokyo()).is_none());
    }

    #[test]
    fn normalization_is_idempotent() {
        let snapshot = snapshot_with(vec![area_weather("130000", &["晴れ"], &["19"])]);
        let first = snapshot.normalized(&tokyo());
        let second = snapshot.normalized(&tokyo());
        assert_eq!(first, second);
    }

    #[test]
    fn exact_code_match_only() {
        let snapshot = snapshot_with(vec![area_weather("1300000", &["晴れ"], &["19", "9"])]);
        // "1300000" is not "130000"; prefix similarity must not match
        assert!(snapshot.normalized(&tokyo()).is_none());
    }
}
