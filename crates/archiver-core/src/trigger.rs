//! Snapshot trigger: ask the Wayback Machine to capture a URL now.
//!
//! Every call creates a new capture server-side; there is no dedup.

use crate::config::ArchiverConfig;
use crate::error::ArchiverError;
use crate::http::{self, HttpResponse, Method, RequestOptions};

/// Header the capture endpoint sets when the capture itself failed.
pub const RUNTIME_ERROR_HEADER: &str = "X-Archive-Wayback-Runtime-Error";
/// Header carrying the location of the new capture.
pub const CONTENT_LOCATION_HEADER: &str = "Content-Location";

/// Capture request URL: the target is appended to the save endpoint as-is,
/// without percent-encoding.
pub fn capture_url(cfg: &ArchiverConfig, url: &str) -> String {
    format!("{}{}", cfg.endpoints.save_url, url)
}

/// Triggers a capture of `url` and returns the archived-resource location.
///
/// An empty string means the endpoint neither reported an error nor told us
/// where the capture lives.
pub fn trigger_snapshot(cfg: &ArchiverConfig, url: &str) -> Result<String, ArchiverError> {
    let url = require_url(url)?;

    let request_url = capture_url(cfg, url);
    let response = http::send(Method::Post, &request_url, RequestOptions::from_config(cfg))
        .map_err(|e| {
            tracing::warn!(url, "capture request failed: {}", e);
            ArchiverError::Transport(e)
        })?;

    let result = capture_outcome(&response);
    match &result {
        Ok(location) if location.is_empty() => {
            tracing::warn!(url, status = response.status, "capture returned no location")
        }
        Ok(location) => tracing::info!(url, location = location.as_str(), "snapshot captured"),
        Err(e) => tracing::warn!(url, "{}", e),
    }
    result
}

/// Rejects blank URLs; anything else is passed through untouched.
pub(crate) fn require_url(url: &str) -> Result<&str, ArchiverError> {
    if url.trim().is_empty() {
        return Err(ArchiverError::EmptyUrl);
    }
    Ok(url)
}

/// Interprets capture response headers. The runtime error header wins over
/// any location header.
pub(crate) fn capture_outcome(response: &HttpResponse) -> Result<String, ArchiverError> {
    if let Some(err) = response.header(RUNTIME_ERROR_HEADER) {
        return Err(ArchiverError::Capture(err.to_string()));
    }
    Ok(response
        .header(CONTENT_LOCATION_HEADER)
        .map(str::to_string)
        .unwrap_or_default())
}
