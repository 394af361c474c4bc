//! # Forecast Builder
//!
//! Turns canonical [`SurfData`] from any tier into the [`SurfResponse`] callers
//! see: each point's instant is moved into the target zone and labelled with a
//! [`SkillLevel`]. Order is preserved and nothing is filtered.

use crate::{SkillLevel, SurfData, SurfForecast, SurfResponse};
use chrono_tz::Tz;

/// Zone used when the configured one is unknown
pub const FALLBACK_ZONE: Tz = Tz::UTC;

/// Resolve an IANA zone name, substituting UTC (with a warning) if unknown.
pub fn resolve_timezone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(e) => {
            log::warn!("Failed to load timezone {:?}, using UTC: {}", name, e);
            FALLBACK_ZONE
        }
    }
}

/// Classify conditions from wave height (m) and peak period (s).
///
/// Bounds are inclusive:
/// ```
/// use easy_surf_lib::{forecast::skill_level, SkillLevel};
///
/// assert_eq!(skill_level(1.0, 8.0), SkillLevel::Beginner);
/// assert_eq!(skill_level(1.8, 12.0), SkillLevel::Intermediate);
/// assert_eq!(skill_level(1.81, 12.0), SkillLevel::Advanced);
/// ```
pub fn skill_level(hs: f64, tp: f64) -> SkillLevel {
    if hs <= 1.0 && tp <= 8.0 {
        SkillLevel::Beginner
    } else if hs <= 1.8 && tp <= 12.0 {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Advanced
    }
}

/// Build the response body, one entry per point.
pub fn build_response(data: &SurfData, tz: &Tz) -> SurfResponse {
    let forecast = data
        .data
        .iter()
        .map(|point| SurfForecast {
            time: point.time.with_timezone(tz).fixed_offset(),
            hs: point.hs,
            tp: point.tp,
            skill_level: skill_level(point.hs, point.tp),
        })
        .collect();

    SurfResponse { forecast }
}
