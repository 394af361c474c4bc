//! # Fallback Wave Model
//!
//! This module provides a formula-based wave estimate used when every network
//! tier is unavailable. It is the terminal step of the fallback chain, so it
//! cannot fail: unparseable coordinates become `0.0` and the output always has
//! [`HOURS`] points.
//!
//! ## Model Characteristics
//!
//! The estimate follows a simple diurnal pattern keyed on each point's local
//! hour of day `h`:
//!
//! - **Base height**: `0.7 + 0.3 * sin(h/24 * 2π)` meters
//! - **Variation**: `+ (index mod 6) * 0.05` meters, a repeating six-hour ramp
//! - **Period**: `7.0 + 2.0 * height` seconds (period tracks height)
//! - **Direction**: `180 + 30 * sin(h/12 * π)` degrees (southerly, swinging ±30°)
//!
//! ### Accuracy Trade-offs
//! - ✅ **Always available**: no network, no failure modes
//! - ✅ **Deterministic**: identical clock input yields identical output
//! - ❌ **Location blind**: coordinates are only copied onto the points
//! - ❌ **No weather**: ignores swell, wind and storms entirely
//!
//! The `X-Data-Source` header tells callers they are seeing an estimate.

use crate::{parse_coord, PointData, SurfData};
use chrono::{DateTime, Duration, Local, TimeZone, Timelike, Utc};
use std::f64::consts::PI;

/// Model identifier attached to estimated data
pub const MODEL: &str = "fallback-estimated";

/// Number of hourly points generated
pub const HOURS: usize = 24;

/// Generate an estimated forecast starting at the current local time.
pub fn estimate(lat: &str, lon: &str) -> SurfData {
    estimate_at(lat, lon, Local::now())
}

/// Generate an estimated forecast starting at `now`.
///
/// The hour of day driving the formulas is read in `now`'s own zone, so pass a
/// local time to get local diurnal behavior.
pub fn estimate_at<Tz: TimeZone>(lat: &str, lon: &str, now: DateTime<Tz>) -> SurfData {
    let lat = parse_coord(lat);
    let lon = parse_coord(lon);

    let mut data = Vec::with_capacity(HOURS);
    for index in 0..HOURS {
        let time = now.clone() + Duration::hours(index as i64);
        let hour = time.hour() as f64;

        let base_wave = 0.7 + 0.3 * ((hour / 24.0) * 2.0 * PI).sin();
        let wave_height = base_wave + (index % 6) as f64 * 0.05;
        let wave_period = 7.0 + wave_height * 2.0;
        let wave_direction = 180.0 + 30.0 * ((hour / 12.0) * PI).sin();

        data.push(PointData::new(
            time.with_timezone(&Utc),
            lat,
            lon,
            wave_height,
            wave_period,
            wave_direction,
        ));
    }

    SurfData {
        data,
        model: MODEL.to_string(),
        model_info: serde_json::json!({
            "name": "Estimated diurnal model",
            "hours": HOURS,
        }),
    }
}
