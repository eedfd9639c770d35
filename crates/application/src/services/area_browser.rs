//! Area drill-down navigation
//!
//! Each navigation step produces a fresh immutable view model; the
//! presentation layer re-renders from the latest one instead of mutating
//! shared widget state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// One selectable row in a drill-down listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaListEntry {
    /// Area code of this row
    pub code: String,
    /// Display name
    pub name: String,
    /// Codes to drill into on selection; empty at the leaf tier
    pub child_codes: Vec<String>,
}

/// Immutable listing for one navigation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaListView {
    /// Heading shown above the listing
    pub title: String,
    /// Rows in display order
    pub entries: Vec<AreaListEntry>,
}

/// Navigates the three-tier area taxonomy
pub struct AreaBrowserService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for AreaBrowserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AreaBrowserService").finish_non_exhaustive()
    }
}

impl AreaBrowserService {
    /// Create a browser over the given weather port
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Top-level region listing
    #[instrument(skip(self))]
    pub async fn regions(&self) -> Result<AreaListView, ApplicationError> {
        let taxonomy = self.weather.area_taxonomy().await?;
        let entries = taxonomy.regions().into_iter().map(Into::into).collect();

        Ok(AreaListView {
            title: "Select a region".to_string(),
            entries,
        })
    }

    /// Prefecture listing for one region
    ///
    /// An unknown region code yields an empty listing, not an error.
    #[instrument(skip(self))]
    pub async fn prefectures(&self, region_code: &str) -> Result<AreaListView, ApplicationError> {
        let taxonomy = self.weather.area_taxonomy().await?;
        let child_codes = taxonomy.region_children(region_code);
        let entries = taxonomy
            .prefectures(&child_codes)
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(AreaListView {
            title: "Select a prefecture".to_string(),
            entries,
        })
    }

    /// Sub-area listing for one prefecture
    ///
    /// An unknown prefecture code yields an empty listing, not an error.
    #[instrument(skip(self))]
    pub async fn sub_areas(&self, prefecture_code: &str) -> Result<AreaListView, ApplicationError> {
        let taxonomy = self.weather.area_taxonomy().await?;
        let child_codes = taxonomy.prefecture_children(prefecture_code);
        let entries = taxonomy
            .sub_areas(&child_codes)
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(AreaListView {
            title: "Select an area".to_string(),
            entries,
        })
    }
}

impl From<domain::AreaSummary> for AreaListEntry {
    fn from(summary: domain::AreaSummary) -> Self {
        Self {
            code: summary.code,
            name: summary.name,
            child_codes: summary.child_codes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::weather_port::MockWeatherPort;
    use domain::{AreaNode, AreaTaxonomy};
    use std::collections::BTreeMap;

    fn node(name: &str, children: &[&str]) -> AreaNode {
        AreaNode {
            name: name.to_string(),
            children: children.iter().map(ToString::to_string).collect(),
        }
    }

    fn sample_taxonomy() -> AreaTaxonomy {
        let mut centers = BTreeMap::new();
        centers.insert("010300".to_string(), node("関東甲信地方", &["130000"]));

        let mut offices = BTreeMap::new();
        offices.insert("130000".to_string(), node("東京都", &["130010"]));

        let mut class10s = BTreeMap::new();
        class10s.insert("130010".to_string(), node("東京地方", &[]));

        AreaTaxonomy::new(centers, offices, class10s)
    }

    fn browser_with_taxonomy() -> AreaBrowserService {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_area_taxonomy()
            .returning(|| Ok(sample_taxonomy()));
        AreaBrowserService::new(Arc::new(weather))
    }

    #[tokio::test]
    async fn regions_view_lists_centers() {
        let browser = browser_with_taxonomy();
        let view = browser.regions().await.expect("view");

        assert_eq!(view.title, "Select a region");
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].code, "010300");
        assert_eq!(view.entries[0].child_codes, vec!["130000".to_string()]);
    }

    #[tokio::test]
    async fn prefectures_view_resolves_region_children() {
        let browser = browser_with_taxonomy();
        let view = browser.prefectures("010300").await.expect("view");

        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].name, "東京都");
    }

    #[tokio::test]
    async fn unknown_region_yields_empty_listing() {
        let browser = browser_with_taxonomy();
        let view = browser.prefectures("999999").await.expect("view");
        assert!(view.entries.is_empty());
    }

    #[tokio::test]
    async fn sub_areas_view_resolves_prefecture_children() {
        let browser = browser_with_taxonomy();
        let view = browser.sub_areas("130000").await.expect("view");

        assert_eq!(view.title, "Select an area");
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].name, "東京地方");
        assert!(view.entries[0].child_codes.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_area_taxonomy()
            .returning(|| Err(ApplicationError::ExternalService("down".to_string())));
        let browser = AreaBrowserService::new(Arc::new(weather));

        let result = browser.regions().await;
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }
}
