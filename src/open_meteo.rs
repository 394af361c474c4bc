//! # Open-Meteo Marine Forecast (free tier)
//!
//! No key required. The provider answers with parallel hourly arrays which are
//! normalized here into canonical [`PointData`] records:
//!
//! - timestamps are parsed as `%Y-%m-%dT%H:%M`; entries that fail are skipped
//!   without aborting the batch
//! - missing or `null` numbers at an index default to `0.0`, unlike the Swell
//!   Cloud tier where absent fields stay absent
//! - every point carries the query's coordinates, not the provider's grid point
//!
//! A successful call can normalize to zero points; the orchestrator decides what
//! that means.

use crate::config::UpstreamConfig;
use crate::error::SourceError;
use crate::{parse_coord, PointData, SurfData};
use chrono::NaiveDateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Model identifier attached to normalized data
pub const MODEL: &str = "open-meteo-marine";

const HOURLY: &str = "wave_height,wave_period,wave_direction";
const FORECAST_DAYS: u32 = 3;
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
pub struct MarineResponse {
    pub hourly: HourlyBlock,
}

#[derive(Debug, Default, Deserialize)]
pub struct HourlyBlock {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub wave_height: Vec<Option<f64>>,
    #[serde(default)]
    pub wave_period: Vec<Option<f64>>,
    #[serde(default)]
    pub wave_direction: Vec<Option<f64>>,
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.open_meteo_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the hourly marine forecast and normalize it into [`SurfData`].
    pub async fn fetch(&self, lat: &str, lon: &str) -> Result<SurfData, SourceError> {
        let forecast_days = FORECAST_DAYS.to_string();
        let response = self
            .client
            .get(format!("{}/v1/marine", self.base_url))
            .query(&[
                ("latitude", lat),
                ("longitude", lon),
                ("hourly", HOURLY),
                ("timezone", "auto"),
                ("forecast_days", forecast_days.as_str()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let payload: MarineResponse = serde_json::from_slice(&body)?;

        Ok(normalize(&payload, lat, lon))
    }
}

/// Convert the provider's parallel hourly arrays into canonical points.
pub fn normalize(payload: &MarineResponse, lat: &str, lon: &str) -> SurfData {
    let lat = parse_coord(lat);
    let lon = parse_coord(lon);
    let hourly = &payload.hourly;

    let value_at = |values: &[Option<f64>], idx: usize| {
        values.get(idx).copied().flatten().unwrap_or(0.0)
    };

    let mut data = Vec::with_capacity(hourly.time.len());
    for (idx, stamp) in hourly.time.iter().enumerate() {
        // Provider-local wall time, taken as UTC
        let Ok(time) = NaiveDateTime::parse_from_str(stamp, TIME_FORMAT) else {
            log::debug!("Skipping unparseable Open-Meteo timestamp {:?}", stamp);
            continue;
        };

        data.push(PointData::new(
            time.and_utc(),
            lat,
            lon,
            value_at(&hourly.wave_height, idx),
            value_at(&hourly.wave_period, idx),
            value_at(&hourly.wave_direction, idx),
        ));
    }

    SurfData {
        data,
        model: MODEL.to_string(),
        model_info: serde_json::json!({
            "name": "Open-Meteo Marine",
            "forecast_days": FORECAST_DAYS,
        }),
    }
}
