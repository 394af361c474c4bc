//! # Swell Cloud Point Forecast (primary tier)
//!
//! Keyed commercial marine API. The point endpoint already answers in our
//! canonical [`SurfData`] shape, so there is no normalization step: the body is
//! decoded as-is and optional fields that the API omits stay `None`.
//!
//! Any non-200 status, transport error or undecodable body is a
//! [`SourceError`]; a partial result is never returned.

use crate::config::UpstreamConfig;
use crate::error::SourceError;
use crate::SurfData;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Variables requested from the point endpoint
const VARIABLES: &str = "hs,tp,wndspd";

#[derive(Clone)]
pub struct SwellCloudClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for SwellCloudClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwellCloudClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl SwellCloudClient {
    pub fn new(config: &UpstreamConfig, api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.swell_cloud_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Fetch the point forecast for the given coordinates.
    pub async fn fetch(&self, lat: &str, lon: &str) -> Result<SurfData, SourceError> {
        let response = self
            .client
            .get(format!("{}/v1/point", self.base_url))
            .query(&[
                ("lat", lat),
                ("lon", lon),
                ("units", "si"),
                ("variables", VARIABLES),
            ])
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        parse_point_payload(&body)
    }
}

fn parse_point_payload(body: &[u8]) -> Result<SurfData, SourceError> {
    Ok(serde_json::from_slice(body)?)
}
