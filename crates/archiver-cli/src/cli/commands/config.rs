//! `archiver config` – show where config lives and what is in effect.

use anyhow::Result;
use archiver_core::config;
use archiver_core::Archiver;
use std::path::Path;

pub fn run_config(archiver: &Archiver, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(archiver.config())?);
    Ok(())
}
