//! Forecast lookup
//!
//! Fetch failures and shape mismatches both degrade to a `NoData` view; the
//! presentation layer renders a placeholder message instead of erroring.

use std::sync::Arc;

use domain::AreaCode;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::ports::WeatherPort;

/// The populated forecast view model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDetails {
    /// Area the forecast is for
    pub area_code: String,
    /// Office that published the forecast, when reported
    pub publishing_office: Option<String>,
    /// Publication timestamp, when reported
    pub report_datetime: Option<String>,
    /// Weather description, fallback literal when absent
    pub weather: String,
    /// High temperature, fallback literal when absent
    pub temperature_high: String,
    /// Low temperature, fallback literal when absent
    pub temperature_low: String,
    /// Wind descriptions as reported
    pub winds: Vec<String>,
}

/// View model for one forecast lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastView {
    /// Forecast data was retrieved and matched the requested area
    Data(ForecastDetails),
    /// Nothing could be retrieved or the area was absent from the payload
    NoData,
}

/// Looks up and normalizes forecasts for display
pub struct ForecastService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService").finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a forecast service over the given weather port
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Produce the forecast view for one area
    ///
    /// Never fails: any failure along the way becomes `ForecastView::NoData`.
    #[instrument(skip(self), fields(area = %area))]
    pub async fn forecast_view(&self, area: &AreaCode) -> ForecastView {
        let snapshot = match self.weather.forecast(area).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "forecast fetch failed");
                return ForecastView::NoData;
            }
        };

        snapshot.normalized(area).map_or(ForecastView::NoData, |n| {
            ForecastView::Data(ForecastDetails {
                area_code: area.to_string(),
                publishing_office: snapshot.publishing_office.clone(),
                report_datetime: snapshot.report_datetime.clone(),
                weather: n.weather,
                temperature_high: n.temperature_high,
                temperature_low: n.temperature_low,
                winds: n.winds,
            })
        })
    }
}
