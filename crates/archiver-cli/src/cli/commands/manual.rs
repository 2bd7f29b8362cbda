//! `archiver manual '<json>' --secret S` – serve one manual trigger request.

use anyhow::{Context, Result};
use archiver_core::manual::{ManualTriggerRequest, ManualTriggerResponse};
use archiver_core::Archiver;

pub(crate) fn parse_request(raw: &str) -> Result<ManualTriggerRequest> {
    serde_json::from_str(raw).context("manual trigger request must be {\"url\": ..., \"token\": ...}")
}

pub async fn run_manual(archiver: Archiver, request: String, secret: String) -> Result<()> {
    let req = parse_request(&request)?;
    let resp: ManualTriggerResponse =
        tokio::task::spawn_blocking(move || archiver.manual_trigger(&secret, &req))
            .await
            .context("manual trigger task join")?;
    println!("{}", serde_json::to_string(&resp)?);
    if !resp.success {
        anyhow::bail!("manual trigger failed: {}", resp.data);
    }
    Ok(())
}
