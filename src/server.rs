//! HTTP API
//!
//! `GET /swell?lat=..&lon=..` runs the fallback chain and answers with the
//! forecast as JSON; the `X-Data-Source` header names the tier that produced it.

use crate::chain::Forecaster;
use crate::error::RequestError;
use axum::{
    extract::{Query, State},
    http::header::{HeaderName, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Response header naming the data source
pub const DATA_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-data-source");

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub forecaster: Arc<Forecaster>,
}

/// Query params for /swell
#[derive(Debug, Default)]
pub struct SwellQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl SwellQuery {
    /// Collect coordinates from raw query pairs. Repeated keys are allowed;
    /// the first non-empty value of each wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, v)| k == key && !v.is_empty())
                .map(|(_, v)| v.clone())
        };

        SwellQuery {
            lat: first("lat"),
            lon: first("lon"),
        }
    }

    /// Both coordinates, or `MissingParameter` if either is absent or empty.
    fn coordinates(&self) -> Result<(&str, &str), RequestError> {
        match (self.lat.as_deref(), self.lon.as_deref()) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => Ok((lat, lon)),
            _ => Err(RequestError::MissingParameter),
        }
    }
}

/// GET /swell - Surf forecast for a coordinate pair
async fn swell(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, RequestError> {
    let query = SwellQuery::from_pairs(&pairs);
    let (lat, lon) = query.coordinates()?;

    let (source, response) = state.forecaster.forecast(lat, lon).await;

    Ok((
        [(DATA_SOURCE_HEADER, HeaderValue::from_static(source.label()))],
        Json(response),
    ))
}

/// GET /health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// Create the HTTP router
pub fn create_router(forecaster: Arc<Forecaster>) -> Router {
    let state = AppState { forecaster };

    Router::new()
        .route("/health", get(health_check))
        .route("/swell", get(swell))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_http_server(forecaster: Arc<Forecaster>, bind: &str) -> anyhow::Result<()> {
    let app = create_router(forecaster);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    log::info!("HTTP server listening on {}", bind);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: Option<&str>, lon: Option<&str>) -> SwellQuery {
        SwellQuery {
            lat: lat.map(str::to_string),
            lon: lon.map(str::to_string),
        }
    }

    #[test]
    fn both_coordinates_required() {
        assert_eq!(query(Some("1"), Some("2")).coordinates(), Ok(("1", "2")));
        assert_eq!(
            query(None, Some("2")).coordinates(),
            Err(RequestError::MissingParameter)
        );
        assert_eq!(
            query(Some("1"), None).coordinates(),
            Err(RequestError::MissingParameter)
        );
        assert_eq!(
            query(Some(""), Some("2")).coordinates(),
            Err(RequestError::MissingParameter)
        );
        assert_eq!(query(None, None).coordinates(), Err(RequestError::MissingParameter));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_take_first_non_empty_value() {
        let query = SwellQuery::from_pairs(&pairs(&[
            ("lat", ""),
            ("lat", "-23.5"),
            ("lat", "9"),
            ("lon", "-46.6"),
            ("units", "si"),
        ]));
        assert_eq!(query.coordinates(), Ok(("-23.5", "-46.6")));
    }

    #[test]
    fn empty_values_only_are_missing() {
        let query = SwellQuery::from_pairs(&pairs(&[("lat", ""), ("lon", "2")]));
        assert_eq!(query.coordinates(), Err(RequestError::MissingParameter));
        let query = SwellQuery::from_pairs(&[]);
        assert_eq!(query.coordinates(), Err(RequestError::MissingParameter));
    }

    #[test]
    fn header_name_is_canonical() {
        assert_eq!(DATA_SOURCE_HEADER.as_str(), "x-data-source");
    }
}
