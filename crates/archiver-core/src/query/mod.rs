//! Snapshot query against the CDX index.
//!
//! Returns the known captures of a URL, most recent first.

mod cdx;

use crate::config::ArchiverConfig;
use crate::error::ArchiverError;
use crate::http::{self, Method, RequestOptions};
use crate::trigger;
use serde::Serialize;
use std::collections::BTreeMap;

pub use cdx::parse_cdx;

/// One CDX row keyed by the header row's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRecord {
    /// Capture time, `YYYYMMDDHHMMSS` in UTC.
    pub timestamp: String,
    /// URL that was captured.
    pub original: String,
    /// Any other columns the endpoint returned (urlkey, statuscode, digest...).
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// CDX request URL for `url`. The target is not percent-encoded.
pub fn query_url(cfg: &ArchiverConfig, url: &str) -> String {
    format!("{}?url={}&output=json", cfg.endpoints.query_url, url)
}

/// Fetches up to `max_count` snapshots of `url`, newest first.
///
/// `max_count == 0` falls back to `cfg.max_snapshots`. A URL the archive has
/// never seen yields an empty list, not an error.
pub fn query_snapshots(
    cfg: &ArchiverConfig,
    url: &str,
    max_count: usize,
) -> Result<Vec<SnapshotRecord>, ArchiverError> {
    let url = trigger::require_url(url)?;
    let max_count = if max_count == 0 {
        cfg.max_snapshots
    } else {
        max_count
    };

    let response = http::send(Method::Get, &query_url(cfg, url), RequestOptions::from_config(cfg))?;
    if response.status != 200 {
        let body = response.body_text();
        tracing::warn!(url, status = response.status, "snapshot query failed");
        return Err(ArchiverError::Query {
            status: response.status,
            body,
        });
    }

    let records = parse_cdx(&response.body, max_count)?;
    tracing::debug!(url, count = records.len(), "snapshots fetched");
    Ok(records)
}
