//! # Configuration Management
//!
//! Two files feed the service at startup:
//!
//! - `swell-config.toml`: server address, upstream endpoints, target time zone and
//!   the default location used by `--stdout` mode. Missing or invalid files fall
//!   back to [`Config::default`].
//! - `local.properties`: holds the `API_KEY=<value>` line for the Swell Cloud API.
//!   Absence is not an error; the service then runs on the free tiers only.
//!
//! The API key is returned as a value and handed to the forecaster explicitly;
//! nothing here is stored globally.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from swell-config.toml
///
/// Every section and field is optional; anything left out keeps its default.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub forecast: ForecastConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "0.0.0.0:8080"
    pub bind: String,
}

/// Upstream marine API endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the keyed Swell Cloud API
    pub swell_cloud_url: String,
    /// Base URL of the free Open-Meteo Marine API
    pub open_meteo_url: String,
    /// Per-request timeout applied to each upstream call
    pub timeout_secs: u64,
}

/// Forecast presentation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// IANA zone the forecast times are converted into
    pub timezone: String,
    /// Location used by `--stdout` mode
    pub default_lat: f64,
    pub default_lon: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            timezone: "America/Sao_Paulo".to_string(),
            default_lat: -23.5505, // São Paulo
            default_lon: -46.6333,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            swell_cloud_url: "https://api.swellcloud.net".to_string(),
            open_meteo_url: "https://marine-api.open-meteo.com".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Config {
    /// Load configuration from swell-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("swell-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    log::info!(
                        "Loaded configuration from {}",
                        path.as_ref().display()
                    );
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config file format: {}", e);
                    log::warn!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config file found, using default configuration");
                Self::default()
            }
        }
    }
}

/// Read the Swell Cloud API key from local.properties.
pub fn load_api_key() -> Option<String> {
    load_api_key_from_path("local.properties")
}

/// Read the API key from a key-value properties file.
///
/// Returns `None` (with a warning) when the file is unreadable or holds no
/// non-empty `API_KEY` entry.
pub fn load_api_key_from_path<P: AsRef<Path>>(path: P) -> Option<String> {
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => {
            log::warn!(
                "Could not read {}, will use free API fallback",
                path.as_ref().display()
            );
            return None;
        }
    };

    let key = parse_api_key(&contents);
    if key.is_none() {
        log::warn!(
            "API_KEY not found in {}, will use free API fallback",
            path.as_ref().display()
        );
    }
    key
}

fn parse_api_key(contents: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("API_KEY"))
        .filter_map(|line| line.split_once('='))
        .map(|(_, value)| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
