//! `archiver snapshots <url>` – list snapshots, newest first.

use anyhow::{Context, Result};
use archiver_core::view::{SnapshotListing, NO_ARCHIVES_MESSAGE};
use archiver_core::Archiver;

pub async fn run_snapshots(
    archiver: Archiver,
    url: String,
    max: Option<usize>,
    json: bool,
) -> Result<()> {
    let max = max.unwrap_or(archiver.config().max_snapshots);
    let (archiver, url, records) = tokio::task::spawn_blocking(move || {
        let records = archiver.snapshots_limited(&url, max);
        (archiver, url, records)
    })
    .await
    .context("query task join")?;
    let records = records.context("Attempt to fetch snapshots failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let listing = SnapshotListing::build(archiver.config(), &url, &records);
    if listing.is_empty() {
        println!("{NO_ARCHIVES_MESSAGE}");
        return Ok(());
    }
    for entry in &listing.entries {
        println!("{:<32} {}", entry.label, entry.link);
    }
    println!();
    println!("See all snapshots: {}", listing.history_link);
    Ok(())
}
