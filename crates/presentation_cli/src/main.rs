//! Tenki CLI
//!
//! Command-line drill-down and snapshot capture for JMA weather data.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::Context;
use application::{
    AreaBrowserService, AreaListView, CaptureReport, ForecastService, ForecastView,
    SnapshotService, StoredWeatherRecord, WeatherPort,
};
use clap::{Parser, Subcommand};
use domain::AreaCode;
use infrastructure::{AppConfig, JmaWeatherAdapter, SqliteWeatherStore, create_pool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tenki CLI
#[derive(Parser)]
#[command(name = "tenki-cli")]
#[command(author, version, about = "JMA weather lookup and capture", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the top-level regions
    Regions,

    /// List the prefectures of one region
    Prefectures {
        /// Region code (a `centers` entry)
        region_code: String,
    },

    /// List the sub-areas of one prefecture
    SubAreas {
        /// Prefecture code (an `offices` entry)
        prefecture_code: String,
    },

    /// Show the current forecast for an area
    Forecast {
        /// Area code; falls back to the configured default
        area_code: Option<String>,
    },

    /// Fetch a forecast snapshot and persist it
    Capture {
        /// Area code; falls back to the configured default
        area_code: Option<String>,
    },

    /// Show stored weather for an area on an exact date
    History {
        /// Area code
        area_code: String,

        /// Date string, exactly as stored (e.g. 2024-12-04T17:00:00+09:00)
        date: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn render_area_list(view: &AreaListView) -> String {
    let mut out = format!("{}\n", view.title);
    if view.entries.is_empty() {
        out.push_str("  (no entries)\n");
    }
    for entry in &view.entries {
        out.push_str(&format!("  {}  {}\n", entry.code, entry.name));
    }
    out
}

fn render_forecast(view: &ForecastView) -> String {
    match view {
        ForecastView::NoData => "could not retrieve weather information".to_string(),
        ForecastView::Data(details) => {
            let mut out = format!("Forecast for {}", details.area_code);
            if let Some(office) = &details.publishing_office {
                out.push_str(&format!(" ({office}"));
                if let Some(reported) = &details.report_datetime {
                    out.push_str(&format!(", {reported}"));
                }
                out.push(')');
            }
            out.push('\n');
            out.push_str(&format!("  Weather: {}\n", details.weather));
            out.push_str(&format!("  High:    {}°C\n", details.temperature_high));
            out.push_str(&format!("  Low:     {}°C\n", details.temperature_low));
            if !details.winds.is_empty() {
                out.push_str(&format!("  Wind:    {}\n", details.winds.join(", ")));
            }
            out
        }
    }
}

fn render_report(report: &CaptureReport) -> String {
    if !report.fetched {
        return format!(
            "could not retrieve weather information for {}, nothing captured",
            report.area_code
        );
    }
    format!(
        "Captured {}: {} areas, {} rows written, {} skipped",
        report.area_code, report.areas_recorded, report.rows_written, report.rows_skipped
    )
}

fn render_history(records: &[StoredWeatherRecord]) -> String {
    if records.is_empty() {
        return "no stored weather for that area and date".to_string();
    }

    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{}  {}  weather: {}  wind: {}  high: {}  low: {}\n",
            record.area_code,
            record.date,
            record.weather.as_deref().unwrap_or("-"),
            record.wind.as_deref().unwrap_or("-"),
            record.temperature_high.as_deref().unwrap_or("-"),
            record.temperature_low.as_deref().unwrap_or("-"),
        ));
    }
    out
}

/// Resolve the area code argument against the configured default
fn resolve_area(arg: Option<String>, default_area: &str) -> anyhow::Result<AreaCode> {
    let code = arg.unwrap_or_else(|| default_area.to_string());
    AreaCode::new(code).context("invalid area code")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    let weather: Arc<dyn WeatherPort> =
        Arc::new(JmaWeatherAdapter::with_config(config.weather.to_jma_config())?);

    match cli.command {
        Commands::Regions => {
            let view = AreaBrowserService::new(weather).regions().await?;
            print!("{}", render_area_list(&view));
        }

        Commands::Prefectures { region_code } => {
            let view = AreaBrowserService::new(weather)
                .prefectures(&region_code)
                .await?;
            print!("{}", render_area_list(&view));
        }

        Commands::SubAreas { prefecture_code } => {
            let view = AreaBrowserService::new(weather)
                .sub_areas(&prefecture_code)
                .await?;
            print!("{}", render_area_list(&view));
        }

        Commands::Forecast { area_code } => {
            let area = resolve_area(area_code, &config.weather.default_area)?;
            let view = ForecastService::new(weather).forecast_view(&area).await;
            println!("{}", render_forecast(&view));
        }

        Commands::Capture { area_code } => {
            let area = resolve_area(area_code, &config.weather.default_area)?;
            let pool = create_pool(&config.database)?;
            let store = Arc::new(SqliteWeatherStore::new(Arc::new(pool)));
            let service = SnapshotService::new(Arc::clone(&weather), store);

            if !weather.is_available().await {
                tracing::warn!("JMA service is not reachable, capture will likely record nothing");
            }

            let report = service.capture(&area).await;
            println!("{}", render_report(&report));
        }

        Commands::History { area_code, date } => {
            let area = AreaCode::new(area_code).context("invalid area code")?;
            let pool = create_pool(&config.database)?;
            let store = Arc::new(SqliteWeatherStore::new(Arc::new(pool)));
            let service = SnapshotService::new(weather, store);

            let records = service.history(&area, &date).await?;
            print!("{}", render_history(&records));
        }
    }

    Ok(())
}
