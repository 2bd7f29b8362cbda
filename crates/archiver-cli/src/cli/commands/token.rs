//! `archiver token [action] --secret S` – print an anti-forgery token.

use archiver_core::nonce;

pub fn run_token(action: &str, secret: &str) {
    println!("{}", nonce::issue_token(secret, action));
}
