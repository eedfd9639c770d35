//! Weather data port
//!
//! Defines the interface for retrieving the area taxonomy and per-area
//! forecast snapshots.

use async_trait::async_trait;
use domain::{AreaCode, AreaTaxonomy, ForecastSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the full three-tier area taxonomy
    async fn area_taxonomy(&self) -> Result<AreaTaxonomy, ApplicationError>;

    /// Fetch a fresh forecast snapshot for one area
    ///
    /// Every call produces a new snapshot; results are never merged against
    /// prior data.
    async fn forecast(&self, area: &AreaCode) -> Result<ForecastSnapshot, ApplicationError>;

    /// Check whether the upstream service is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
