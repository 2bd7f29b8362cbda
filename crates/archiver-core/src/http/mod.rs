//! Blocking HTTP round trips to the Wayback Machine.
//!
//! Uses the curl crate (libcurl) with one easy handle per call, so calls
//! share no state and can run on any thread. Call from `spawn_blocking`
//! if used from async code.

mod parse;

use crate::config::ArchiverConfig;
use std::time::Duration;

pub(crate) use parse::parse_headers;

/// Request method used for a Wayback call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    /// POST with an empty body (capture requests).
    Post,
}

/// Per-request transport limits.
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl RequestOptions {
    pub fn from_config(cfg: &ArchiverConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

/// Status, headers and body of the final response (after redirects).
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u32,
    /// Header (name, value) pairs in arrival order; names keep their original case.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// One raw header line as text. Invalid UTF-8 is replaced, not dropped.
fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Performs one request and returns the final response.
///
/// Follows redirects. Any HTTP status is returned as a response; only
/// transport failures are errors.
pub fn send(method: Method, url: &str, opts: RequestOptions) -> Result<HttpResponse, curl::Error> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(5)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    if method == Method::Post {
        easy.post(true)?;
        easy.post_field_size(0)?;
    }

    tracing::debug!(?method, url, "wayback request");

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            header_lines.push(header_line(data));
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "wayback response");

    Ok(HttpResponse {
        status,
        headers: parse_headers(&header_lines),
        body,
    })
}
