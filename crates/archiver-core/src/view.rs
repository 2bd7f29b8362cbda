//! Snapshot links and display of capture times.
//!
//! Capture timestamps are `YYYYMMDDHHMMSS` in UTC; they are shifted into the
//! site's offset only when rendered for people.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::config::{ArchiverConfig, DisplayConfig};
use crate::error::ArchiverError;
use crate::query::SnapshotRecord;

const CDX_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Shown when a URL has no captures.
pub const NO_ARCHIVES_MESSAGE: &str = "There are no archives for this URL.";

/// Browsable link to one capture: `{view_url}{timestamp}/{original}`.
pub fn view_url(cfg: &ArchiverConfig, record: &SnapshotRecord) -> String {
    format!(
        "{}{}/{}",
        cfg.endpoints.view_url, record.timestamp, record.original
    )
}

/// Link to every capture of `url`: `{view_url}*/{url}`.
pub fn history_url(cfg: &ArchiverConfig, url: &str) -> String {
    format!("{}*/{}", cfg.endpoints.view_url, url)
}

/// Parse a 14-digit CDX timestamp as UTC.
pub fn parse_timestamp(ts: &str) -> Result<DateTime<Utc>, ArchiverError> {
    if ts.len() != 14 || !ts.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArchiverError::MalformedResponse(format!(
            "bad capture timestamp {:?}",
            ts
        )));
    }
    let naive = NaiveDateTime::parse_from_str(ts, CDX_TIMESTAMP_FORMAT).map_err(|e| {
        ArchiverError::MalformedResponse(format!("bad capture timestamp {:?}: {}", ts, e))
    })?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Render a UTC capture time in the site's offset using a strftime format.
pub fn format_timestamp(
    at: DateTime<Utc>,
    utc_offset_minutes: i32,
    date_format: &str,
) -> Result<String, ArchiverError> {
    let offset = FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60)).ok_or_else(|| {
        ArchiverError::MalformedResponse(format!("UTC offset out of range: {}m", utc_offset_minutes))
    })?;
    let mut out = String::new();
    // chrono reports bad format items as fmt::Error instead of panicking here.
    write!(out, "{}", at.with_timezone(&offset).format(date_format)).map_err(|_| {
        ArchiverError::MalformedResponse(format!("bad date format {:?}", date_format))
    })?;
    Ok(out)
}

/// Display label for a record, falling back to the raw timestamp.
pub fn display_label(display: &DisplayConfig, record: &SnapshotRecord) -> String {
    parse_timestamp(&record.timestamp)
        .and_then(|at| format_timestamp(at, display.utc_offset_minutes, &display.date_format))
        .unwrap_or_else(|e| {
            tracing::debug!("using raw timestamp for display: {}", e);
            record.timestamp.clone()
        })
}

/// One line of a snapshot listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub label: String,
    pub link: String,
}

/// Presentation-neutral list of snapshots for one URL, ready for any UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotListing {
    pub entries: Vec<ListingEntry>,
    /// Link to every capture of the URL.
    pub history_link: String,
}

impl SnapshotListing {
    pub fn build(cfg: &ArchiverConfig, url: &str, records: &[SnapshotRecord]) -> Self {
        let entries = records
            .iter()
            .map(|r| ListingEntry {
                label: display_label(&cfg.display, r),
                link: view_url(cfg, r),
            })
            .collect();
        Self {
            entries,
            history_link: history_url(cfg, url),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
