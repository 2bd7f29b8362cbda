//! Anti-forgery tokens for the manual trigger surface.
//!
//! A token is HMAC-SHA256 over the action name, keyed by a secret the host
//! keeps, hex encoded. The host hands tokens to its UI; requests must echo one back.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

fn tag(secret: &str, action: &str) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(action.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Compute the token for `action` under `secret` as lowercase hex.
pub fn issue_token(secret: &str, action: &str) -> String {
    hex::encode(tag(secret, action))
}

/// Check `token` against the expected token for `action`. Hex case is ignored.
pub fn verify_token(secret: &str, action: &str, token: &str) -> bool {
    let Ok(presented) = hex::decode(token.trim()) else {
        return false;
    };
    tag(secret, action).ct_eq(&presented).into()
}
