//! Manual trigger surface for UIs (e.g. an admin-bar "Trigger snapshot" button).
//!
//! Requests carry the URL and an anti-forgery token; responses are the
//! `{ "success": bool, "data": string }` payload the UI expects.

use serde::{Deserialize, Serialize};

use crate::archiver::Archiver;
use crate::nonce;

/// Action name tokens for manual triggers are issued for.
pub const TRIGGER_ACTION: &str = "archiver_trigger_archive";

#[derive(Debug, Clone, Deserialize)]
pub struct ManualTriggerRequest {
    pub url: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualTriggerResponse {
    pub success: bool,
    /// Archive URL on success, otherwise a message for the user.
    pub data: String,
}

impl ManualTriggerResponse {
    fn ok(data: String) -> Self {
        Self { success: true, data }
    }

    fn fail(data: impl Into<String>) -> Self {
        Self {
            success: false,
            data: data.into(),
        }
    }
}

impl Archiver {
    /// Verify the request token and trigger a capture of its URL.
    pub fn manual_trigger(&self, secret: &str, req: &ManualTriggerRequest) -> ManualTriggerResponse {
        if !nonce::verify_token(secret, TRIGGER_ACTION, &req.token) {
            tracing::warn!(url = req.url.as_str(), "manual trigger with invalid token");
            return ManualTriggerResponse::fail("Invalid security token.");
        }
        if self.suppressed(&req.url) {
            return ManualTriggerResponse::fail("Archiving is disabled on local addresses.");
        }
        match self.trigger(&req.url) {
            Ok(location) => ManualTriggerResponse::ok(location),
            Err(e) => ManualTriggerResponse::fail(e.to_string()),
        }
    }
}
