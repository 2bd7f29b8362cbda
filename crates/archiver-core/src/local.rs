//! Local/development host detection.
//!
//! The Wayback Machine can't reach a site served from a loopback address, so
//! captures are suppressed there unless explicitly enabled.

use crate::config::ArchiverConfig;

/// Host part of `url`, lowercased, without IPv6 brackets. None if unparseable.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    Some(
        host.trim_start_matches('[')
            .trim_end_matches(']')
            .to_ascii_lowercase(),
    )
}

/// True if `url`'s host is one of the configured local addresses.
pub fn is_local_url(cfg: &ArchiverConfig, url: &str) -> bool {
    match host_of(url) {
        Some(host) => cfg
            .local_addresses
            .iter()
            .any(|addr| addr.trim().eq_ignore_ascii_case(&host)),
        None => false,
    }
}

/// True if captures should be suppressed for `content_url`.
///
/// Checks `site_url` when configured, otherwise the content URL itself.
pub fn suppressed(cfg: &ArchiverConfig, content_url: &str) -> bool {
    if cfg.enable_on_local_addresses {
        return false;
    }
    let target = cfg.site_url.as_deref().unwrap_or(content_url);
    is_local_url(cfg, target)
}
