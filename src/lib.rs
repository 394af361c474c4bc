//! # Easy Surf Core Library
//!
//! This library provides the data model and the data pipeline behind the surf
//! forecast service. A forecast request is answered by the first of three tiers
//! that produces data:
//!
//! 1. **Swell Cloud API**: keyed commercial point forecast (only with an API key)
//! 2. **Open-Meteo Marine API**: free hourly forecast, normalized into our shape
//! 3. **Estimated data**: deterministic formula-based fallback that never fails
//!
//! Whatever tier wins, its [`SurfData`] goes through the forecast builder, which
//! converts timestamps to the configured zone and attaches a [`SkillLevel`].
//!
//! ## Core Types
//!
//! - [`PointData`]: one timestamped wave observation in canonical form
//! - [`SurfData`]: ordered points plus model metadata, as produced by a tier
//! - [`SurfForecast`] / [`SurfResponse`]: the externally visible payload
//! - [`DataSource`]: which tier produced the data

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

pub mod chain;
pub mod config;
pub mod error;
pub mod fallback;
pub mod forecast;
pub mod open_meteo;
pub mod server;
pub mod swell_cloud;

/// A single timestamped wave record.
///
/// Secondary swell, wind-wave and wind fields are optional: they are `None`
/// unless an upstream explicitly supplies them.
///
/// # Example
/// ```
/// use easy_surf_lib::PointData;
///
/// let point: PointData = serde_json::from_str(
///     r#"{"time":"2025-03-01T12:00:00Z","lat":-23.5,"lon":-46.6,"hs":1.2,"tp":9.0,"dp":170.0}"#,
/// ).unwrap();
///
/// assert_eq!(point.hs, 1.2);
/// assert!(point.ss_hs.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    /// Absolute instant of the observation
    pub time: DateTime<Utc>,
    pub lat: f64,
    pub lon: f64,
    /// Significant wave height in meters
    #[serde(default)]
    pub hs: f64,
    /// Peak wave period in seconds
    #[serde(default)]
    pub tp: f64,
    /// Dominant wave direction in degrees
    #[serde(default)]
    pub dp: f64,
    #[serde(default)]
    pub ss_hs: Option<f64>,
    #[serde(default)]
    pub ss_dp: Option<f64>,
    #[serde(default)]
    pub ww_hs: Option<f64>,
    #[serde(default)]
    pub ww_dp: Option<f64>,
    /// Wind speed in m/s
    #[serde(default)]
    pub wndspd: Option<f64>,
    /// Wind direction in degrees
    #[serde(default)]
    pub wnddir: Option<f64>,
}

impl PointData {
    /// Point carrying only the core wave fields; all optional fields are absent.
    pub fn new(time: DateTime<Utc>, lat: f64, lon: f64, hs: f64, tp: f64, dp: f64) -> Self {
        PointData {
            time,
            lat,
            lon,
            hs,
            tp,
            dp,
            ss_hs: None,
            ss_dp: None,
            ww_hs: None,
            ww_dp: None,
            wndspd: None,
            wnddir: None,
        }
    }
}

/// Ordered wave data plus the model that produced it.
///
/// `model_info` is an opaque bag whose structure varies per source; nothing in
/// the pipeline interprets it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SurfData {
    #[serde(default)]
    pub data: Vec<PointData>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub model_info: serde_json::Value,
}

impl SurfData {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Derived suitability of the surf conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

/// One forecast entry as returned to callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfForecast {
    /// Local time in the target zone, serialized with its offset
    pub time: DateTime<FixedOffset>,
    #[serde(rename = "wave_height")]
    pub hs: f64,
    #[serde(rename = "peak_wave_period")]
    pub tp: f64,
    #[serde(rename = "surf_level")]
    pub skill_level: SkillLevel,
}

/// The response body of `GET /swell`.
///
/// # Example
/// ```
/// use easy_surf_lib::SurfResponse;
///
/// let empty = SurfResponse::default();
/// assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"forecast":[]}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfResponse {
    pub forecast: Vec<SurfForecast>,
}

/// The tier that produced a forecast, in fixed priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    SwellCloud,
    OpenMeteo,
    Estimated,
}

impl DataSource {
    /// Value of the `X-Data-Source` response header.
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::SwellCloud => "Swell Cloud API",
            DataSource::OpenMeteo => "Open-Meteo Marine API (free)",
            DataSource::Estimated => "Fallback Estimated Data",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a coordinate the way every tier does: invalid text becomes `0.0`.
pub(crate) fn parse_coord(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}
