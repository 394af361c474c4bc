//! # Easy Surf Service Entry Point
//!
//! Loads configuration and the optional API key, then serves the forecast API.
//! With `--stdout` it instead runs the fallback chain once for the configured
//! default location and prints the result, for development without a client.


use std::env;
use std::sync::Arc;

use anyhow::Context;
use easy_surf_lib::chain::Forecaster;
use easy_surf_lib::config::{load_api_key, Config};
use easy_surf_lib::server;

/// Main application entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(log_env);

    // Development mode: print one forecast to stdout instead of serving
    let development_mode = env::args().any(|arg| arg == "--stdout");

    let config = Config::load();
    let api_key = load_api_key();

    let forecaster = Forecaster::from_config(&config, api_key).context("build HTTP clients")?;

    if forecaster.has_api_key() {
        log::info!("✓ API key loaded - will try Swell Cloud API first");
    } else {
        log::info!("ℹ No API key - will use free Open-Meteo API or fallback data");
    }

    if development_mode {
        let lat = config.forecast.default_lat.to_string();
        let lon = config.forecast.default_lon.to_string();
        let (source, response) = forecaster.forecast(&lat, &lon).await;

        println!("Data source: {}", source);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    log::info!("Data sources available:");
    if forecaster.has_api_key() {
        log::info!("  1. Swell Cloud API (with API key)");
    }
    log::info!("  2. Open-Meteo Marine API (free)");
    log::info!("  3. Fallback estimated data (always available)");

    server::run_http_server(Arc::new(forecaster), &config.server.bind)
        .await
        .with_context(|| format!("serve on {}", config.server.bind))
}
