//! # Fallback Chain
//!
//! The [`Forecaster`] answers a forecast request by walking the upstream tiers
//! in fixed priority order and stopping at the first one that yields data:
//!
//! ```text
//! Swell Cloud (keyed) ──▶ Open-Meteo (free) ──▶ estimate (always succeeds)
//! ```
//!
//! Each upstream attempt produces an [`Attempt`]. Anything other than
//! [`Attempt::Success`] is logged and the walk continues. When no upstream
//! succeeds, [`fallback::estimate`] terminates the chain, so [`Forecaster::resolve`]
//! is total.
//!
//! An empty result from either upstream is treated like a failure.

use crate::config::{Config, UpstreamConfig};
use crate::error::SourceError;
use crate::forecast::{build_response, resolve_timezone};
use crate::open_meteo::OpenMeteoClient;
use crate::swell_cloud::SwellCloudClient;
use crate::{fallback, DataSource, SurfData, SurfResponse};
use chrono_tz::Tz;

/// Upstream tiers, in the order they are tried
pub const UPSTREAMS: [DataSource; 2] = [DataSource::SwellCloud, DataSource::OpenMeteo];

/// Outcome of trying one upstream tier.
#[derive(Debug)]
pub enum Attempt {
    /// Non-empty data; ends the chain
    Success(SurfData),
    /// Call succeeded but produced no points
    Empty,
    Failed(SourceError),
    /// Tier not configured (no API key)
    Skipped,
}

impl From<Result<SurfData, SourceError>> for Attempt {
    fn from(result: Result<SurfData, SourceError>) -> Self {
        match result {
            Ok(data) if data.is_empty() => Attempt::Empty,
            Ok(data) => Attempt::Success(data),
            Err(e) => Attempt::Failed(e),
        }
    }
}

/// Data chosen for a request together with the tier that produced it.
#[derive(Debug)]
pub struct Resolved {
    pub source: DataSource,
    pub data: SurfData,
}

/// Request-independent state for answering forecasts.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Forecaster {
    swell_cloud: Option<SwellCloudClient>,
    open_meteo: OpenMeteoClient,
    timezone: Tz,
}

impl Forecaster {
    /// Build the forecaster. The Swell Cloud tier is only enabled when an
    /// API key is given.
    pub fn new(
        upstream: &UpstreamConfig,
        api_key: Option<String>,
        timezone: &str,
    ) -> Result<Self, reqwest::Error> {
        let swell_cloud = api_key
            .filter(|key| !key.is_empty())
            .map(|key| SwellCloudClient::new(upstream, key))
            .transpose()?;

        Ok(Self {
            swell_cloud,
            open_meteo: OpenMeteoClient::new(upstream)?,
            timezone: resolve_timezone(timezone),
        })
    }

    pub fn from_config(config: &Config, api_key: Option<String>) -> Result<Self, reqwest::Error> {
        Self::new(&config.upstream, api_key, &config.forecast.timezone)
    }

    /// Whether the keyed tier will be attempted
    pub fn has_api_key(&self) -> bool {
        self.swell_cloud.is_some()
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Whether a tier can be attempted with the current configuration
    pub fn is_configured(&self, source: DataSource) -> bool {
        match source {
            DataSource::SwellCloud => self.swell_cloud.is_some(),
            DataSource::OpenMeteo | DataSource::Estimated => true,
        }
    }

    /// Try one upstream tier.
    pub async fn attempt(&self, source: DataSource, lat: &str, lon: &str) -> Attempt {
        match source {
            DataSource::SwellCloud => match &self.swell_cloud {
                Some(client) => client.fetch(lat, lon).await.into(),
                None => Attempt::Skipped,
            },
            DataSource::OpenMeteo => self.open_meteo.fetch(lat, lon).await.into(),
            DataSource::Estimated => Attempt::Success(fallback::estimate(lat, lon)),
        }
    }

    /// Walk the chain and return the first non-empty data.
    pub async fn resolve(&self, lat: &str, lon: &str) -> Resolved {
        for source in UPSTREAMS {
            if self.is_configured(source) {
                log::info!("Attempting {} for lat={}, lon={}", source, lat, lon);
            }

            match self.attempt(source, lat, lon).await {
                Attempt::Success(data) => {
                    log::info!(
                        "✓ Data from {} ({} points) for lat={}, lon={}",
                        source,
                        data.data.len(),
                        lat,
                        lon
                    );
                    return Resolved { source, data };
                }
                Attempt::Empty => {
                    log::warn!("✗ {} returned no data for lat={}, lon={}", source, lat, lon);
                }
                Attempt::Failed(e) => {
                    log::warn!("✗ {} failed for lat={}, lon={}: {}", source, lat, lon, e);
                }
                Attempt::Skipped => {
                    log::debug!("{} skipped, no API key configured", source);
                }
            }
        }

        log::warn!(
            "All APIs failed, using fallback estimated data for lat={}, lon={}",
            lat,
            lon
        );
        Resolved {
            source: DataSource::Estimated,
            data: fallback::estimate(lat, lon),
        }
    }

    /// Resolve data and build the response body.
    pub async fn forecast(&self, lat: &str, lon: &str) -> (DataSource, SurfResponse) {
        let resolved = self.resolve(lat, lon).await;
        (resolved.source, build_response(&resolved.data, &self.timezone))
    }
}
