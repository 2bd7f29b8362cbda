//! `Archiver`: configuration plus the operations a host calls.
//!
//! Holds no mutable state, so one value can be shared across threads
//! (e.g. in an `Arc`) and called concurrently.

use crate::config::ArchiverConfig;
use crate::error::ArchiverError;
use crate::events::{ContentEvent, EventOutcome, SkipReason};
use crate::local;
use crate::query::{self, SnapshotRecord};
use crate::trigger;
use crate::view::SnapshotListing;

#[derive(Debug, Clone)]
pub struct Archiver {
    cfg: ArchiverConfig,
}

impl Archiver {
    pub fn new(cfg: ArchiverConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &ArchiverConfig {
        &self.cfg
    }

    /// Capture `url` now. See [`trigger::trigger_snapshot`].
    pub fn trigger(&self, url: &str) -> Result<String, ArchiverError> {
        trigger::trigger_snapshot(&self.cfg, url)
    }

    /// Snapshots of `url`, newest first, capped at `max_snapshots`.
    pub fn snapshots(&self, url: &str) -> Result<Vec<SnapshotRecord>, ArchiverError> {
        query::query_snapshots(&self.cfg, url, self.cfg.max_snapshots)
    }

    /// Snapshots of `url`, newest first, capped at `max_count` (0 = configured default).
    pub fn snapshots_limited(
        &self,
        url: &str,
        max_count: usize,
    ) -> Result<Vec<SnapshotRecord>, ArchiverError> {
        query::query_snapshots(&self.cfg, url, max_count)
    }

    /// Query and shape snapshots for display.
    pub fn listing(&self, url: &str) -> Result<SnapshotListing, ArchiverError> {
        let records = self.snapshots(url)?;
        Ok(SnapshotListing::build(&self.cfg, url, &records))
    }

    /// True when captures of `url` are suppressed because the site is local.
    pub fn suppressed(&self, url: &str) -> bool {
        local::suppressed(&self.cfg, url)
    }

    /// Handle a host lifecycle event, capturing the content if it qualifies.
    pub fn handle_event(&self, event: &ContentEvent) -> EventOutcome {
        if let Some(reason) = event.skip_reason() {
            tracing::debug!(url = event.url(), ?reason, "event skipped");
            return EventOutcome::Skipped(reason);
        }
        if self.suppressed(event.url()) {
            tracing::debug!(url = event.url(), "local address, capture suppressed");
            return EventOutcome::Skipped(SkipReason::LocalAddress);
        }
        EventOutcome::Triggered(self.trigger(event.url()))
    }
}
