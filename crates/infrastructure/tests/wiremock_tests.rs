//! End-to-end tests for the JMA adapter and the capture flow using wiremock
//!
//! Drives the real adapter, services, and SQLite store against a mock HTTP
//! server to verify the documented degradation behavior.

use std::sync::Arc;

use application::{ForecastService, ForecastView, SnapshotService, WeatherPort};
use domain::AreaCode;
use infrastructure::{DatabaseConfig, JmaWeatherAdapter, SqliteWeatherStore, create_pool};
use integration_jma::JmaConfig;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn sample_area_document() -> serde_json::Value {
    serde_json::json!({
        "centers": {
            "010300": { "name": "関東甲信地方", "children": ["130000"] }
        },
        "offices": {
            "130000": { "name": "東京都", "parent": "010300", "children": ["130010"] }
        },
        "class10s": {
            "130010": { "name": "東京地方", "parent": "130000" }
        }
    })
}

fn sample_forecast_document() -> serde_json::Value {
    serde_json::json!([
        {
            "publishingOffice": "気象庁",
            "reportDatetime": "2024-12-04T17:00:00+09:00",
            "timeSeries": [
                {
                    "timeDefines": ["2024-12-04T17:00:00+09:00"],
                    "areas": [
                        {
                            "area": { "code": "130000", "name": "東京都" },
                            "weathers": ["晴れ"],
                            "winds": ["北の風"],
                            "temps": ["19", "9"]
                        }
                    ]
                },
                {
                    "timeDefines": ["2024-12-05T00:00:00+09:00"],
                    "areas": [
                        {
                            "area": { "code": "130010", "name": "東京地方" },
                            "temps": ["8"]
                        }
                    ]
                }
            ]
        }
    ])
}

/// Adapter wired against the mock server
///
/// # Panics
///
/// Panics if the adapter cannot be created (should not happen in tests).
#[allow(clippy::expect_used)]
fn create_test_adapter(mock_server: &MockServer) -> Arc<JmaWeatherAdapter> {
    let config = JmaConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    Arc::new(JmaWeatherAdapter::with_config(config).expect("Failed to create adapter"))
}

#[allow(clippy::expect_used)]
fn memory_store() -> Arc<SqliteWeatherStore> {
    let config = DatabaseConfig {
        path: ":memory:".to_string(),
        max_connections: 1,
        run_migrations: true,
    };
    let pool = create_pool(&config).expect("Failed to create pool");
    Arc::new(SqliteWeatherStore::new(Arc::new(pool)))
}

#[allow(clippy::expect_used)]
fn tokyo() -> AreaCode {
    AreaCode::new("130000").expect("valid code")
}

#[tokio::test]
async fn adapter_maps_area_master_into_taxonomy() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/common/const/area.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_area_document()))
        .mount(&mock_server)
        .await;

    let adapter = create_test_adapter(&mock_server);
    let taxonomy = adapter.area_taxonomy().await.unwrap();

    let regions = taxonomy.regions();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].code, "010300");

    let prefs = taxonomy.prefectures(&regions[0].child_codes);
    assert_eq!(prefs[0].name, "東京都");
}

#[tokio::test]
async fn forecast_view_normalizes_snapshot() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/data/forecast/130000.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_document()))
        .mount(&mock_server)
        .await;

    let adapter = create_test_adapter(&mock_server);
    let service = ForecastService::new(adapter);

    match service.forecast_view(&tokyo()).await {
        ForecastView::Data(details) => {
            assert_eq!(details.weather, "晴れ");
            assert_eq!(details.temperature_high, "19");
            assert_eq!(details.temperature_low, "9");
            assert_eq!(details.publishing_office.as_deref(), Some("気象庁"));
        }
        ForecastView::NoData => unreachable!("expected data view"),
    }
}

#[tokio::test]
async fn forecast_view_degrades_on_server_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/data/forecast/130000.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let adapter = create_test_adapter(&mock_server);
    let service = ForecastService::new(adapter);

    assert_eq!(service.forecast_view(&tokyo()).await, ForecastView::NoData);
}

#[tokio::test]
async fn capture_persists_rows_and_history_finds_them() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/data/forecast/130000.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_document()))
        .mount(&mock_server)
        .await;

    let adapter = create_test_adapter(&mock_server);
    let store = memory_store();
    let service = SnapshotService::new(adapter, store);

    let report = service.capture(&tokyo()).await;
    assert!(report.fetched);
    assert_eq!(report.areas_recorded, 2);
    assert_eq!(report.rows_written, 2);
    assert_eq!(report.rows_skipped, 0);

    let records = service
        .history(&tokyo(), "2024-12-04T17:00:00+09:00")
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].weather.as_deref(), Some("晴れ"));
    assert_eq!(records[0].wind.as_deref(), Some("北の風"));
    assert_eq!(records[0].temperature_high.as_deref(), Some("19"));
    assert_eq!(records[0].temperature_low.as_deref(), Some("9"));

    // The other span's row belongs to the sub-area
    let sub_area = AreaCode::new("130010").unwrap();
    let records = service
        .history(&sub_area, "2024-12-05T00:00:00+09:00")
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].weather, None);
    assert_eq!(records[0].temperature_high.as_deref(), Some("8"));
    assert_eq!(records[0].temperature_low, None);
}

#[tokio::test]
async fn capture_on_server_error_writes_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/data/forecast/130000.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let adapter = create_test_adapter(&mock_server);
    let store = memory_store();
    let service = SnapshotService::new(adapter, store);

    let report = service.capture(&tokyo()).await;
    assert!(!report.fetched);
    assert_eq!(report.rows_written, 0);

    let records = service
        .history(&tokyo(), "2024-12-04T17:00:00+09:00")
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn adapter_is_available_follows_health() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/common/const/area.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_area_document()))
        .mount(&mock_server)
        .await;

    let adapter = create_test_adapter(&mock_server);
    assert!(adapter.is_available().await);
}
