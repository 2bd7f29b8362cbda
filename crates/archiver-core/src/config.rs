use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default Wayback Machine capture endpoint; the target URL is appended verbatim.
pub const DEFAULT_SAVE_URL: &str = "https://web.archive.org/save/";
/// Default CDX index endpoint.
pub const DEFAULT_QUERY_URL: &str = "https://web.archive.org/cdx/";
/// Default snapshot view prefix.
pub const DEFAULT_VIEW_URL: &str = "https://web.archive.org/web/";

/// Wayback Machine endpoint base URLs (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Capture endpoint; `{save_url}{url}` is requested to trigger a snapshot.
    pub save_url: String,
    /// CDX endpoint; queried with `?url={url}&output=json`.
    pub query_url: String,
    /// Prefix for browsable snapshot links.
    pub view_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            save_url: DEFAULT_SAVE_URL.to_string(),
            query_url: DEFAULT_QUERY_URL.to_string(),
            view_url: DEFAULT_VIEW_URL.to_string(),
        }
    }
}

/// How snapshot timestamps are rendered for people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Site offset from UTC in minutes, applied to capture times before formatting.
    pub utc_offset_minutes: i32,
    /// strftime-style format for capture times.
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            date_format: "%B %-d, %Y @ %-I:%M %P".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/archiver/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiverConfig {
    pub endpoints: Endpoints,
    /// Maximum number of snapshots returned by a query.
    pub max_snapshots: usize,
    /// Archive content even when the site runs on a local address.
    pub enable_on_local_addresses: bool,
    /// Hosts treated as local/development addresses.
    pub local_addresses: Vec<String>,
    /// Public URL of the host site, used for local address detection.
    /// When unset, the host of each content URL is checked instead.
    pub site_url: Option<String>,
    /// Connect timeout for Wayback requests, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for Wayback requests, in seconds. Captures can be slow.
    pub timeout_secs: u64,
    pub display: DisplayConfig,
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            max_snapshots: 20,
            enable_on_local_addresses: false,
            local_addresses: vec![
                "localhost".to_string(),
                "127.0.0.1".to_string(),
                "::1".to_string(),
                "0.0.0.0".to_string(),
            ],
            site_url: None,
            connect_timeout_secs: 15,
            timeout_secs: 120,
            display: DisplayConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("archiver")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ArchiverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ArchiverConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<ArchiverConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ArchiverConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
