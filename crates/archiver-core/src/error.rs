//! Errors returned by Wayback Machine operations.

use thiserror::Error;

/// Failure of a trigger or query call. Nothing here is retried by the core;
/// the host decides whether to try again (e.g. on the next save).
#[derive(Debug, Error)]
pub enum ArchiverError {
    /// Caller passed an empty URL; no request was made.
    #[error("empty URL")]
    EmptyUrl,

    /// Network-level failure (DNS, timeout, connection refused).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    /// The capture endpoint reported a runtime error via `X-Archive-Wayback-Runtime-Error`.
    #[error("capture failed: {0}")]
    Capture(String),

    /// The CDX endpoint answered with a non-200 status. `body` is the raw response text.
    #[error("snapshot query returned HTTP {status}: {body}")]
    Query { status: u32, body: String },

    /// Response was well-formed JSON but not the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ArchiverError {
    /// True for failures reported by the remote side rather than by the network or caller.
    pub fn is_remote(&self) -> bool {
        matches!(self, ArchiverError::Capture(_) | ArchiverError::Query { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_display_carries_body() {
        let e = ArchiverError::Query {
            status: 500,
            body: "upstream exploded".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("upstream exploded"));
        assert!(e.is_remote());
    }

    #[test]
    fn capture_error_display() {
        let e = ArchiverError::Capture("LiveDocumentNotAvailableException".to_string());
        assert_eq!(
            e.to_string(),
            "capture failed: LiveDocumentNotAvailableException"
        );
        assert!(e.is_remote());
        assert!(!ArchiverError::EmptyUrl.is_remote());
    }
}
