//! # Error Types
//!
//! Two families of errors flow through the service:
//!
//! - [`SourceError`]: an upstream tier failed. These never reach the caller; the
//!   orchestrator logs them and moves on to the next tier.
//! - [`RequestError`]: the caller sent a bad request. Rendered as an HTTP response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure of a single upstream data source.
///
/// The fallback chain treats every variant identically ("source failed"); the
/// distinction only matters for the log line.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Network failure or timeout while talking to the upstream
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with something other than 200 OK
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Body could not be decoded into the expected payload
    #[error("malformed upstream body: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

/// Errors surfaced to HTTP callers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("lat and lon query parameters are required")]
    MissingParameter,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            RequestError::MissingParameter => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}
