//! `archiver trigger <url>...` – capture URLs now, concurrently.

use anyhow::{Context, Result};
use archiver_core::{Archiver, ArchiverError};
use std::sync::Arc;
use tokio::task::JoinSet;

pub async fn run_trigger(archiver: Archiver, urls: Vec<String>) -> Result<()> {
    let archiver = Arc::new(archiver);
    let mut set = JoinSet::new();
    for (index, url) in urls.into_iter().enumerate() {
        if archiver.suppressed(&url) {
            println!("{url}\tskipped (local address)");
            continue;
        }
        let archiver = Arc::clone(&archiver);
        set.spawn_blocking(move || {
            let result = archiver.trigger(&url);
            (index, url, result)
        });
    }

    let mut outcomes = Vec::new();
    while let Some(joined) = set.join_next().await {
        outcomes.push(joined.context("trigger task join")?);
    }
    outcomes.sort_by_key(|(index, _, _)| *index);

    let mut failed = 0usize;
    for (_, url, result) in outcomes {
        match result {
            Ok(location) if location.is_empty() => println!("{url}\tcaptured (no location returned)"),
            Ok(location) => println!("{url}\t{location}"),
            Err(e) => {
                failed += 1;
                println!("{url}\t{}: {e}", failure_label(&e));
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} capture(s) failed");
    }
    Ok(())
}

/// Distinguishes refusals by the archive from failures to reach it.
fn failure_label(e: &ArchiverError) -> &'static str {
    if e.is_remote() {
        "rejected by archive"
    } else {
        "failed"
    }
}
