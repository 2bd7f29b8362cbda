//! CLI command handlers, one per file.

mod config;
mod link;
mod manual;
mod snapshots;
mod token;
mod trigger;

pub use config::run_config;
pub use link::run_link;
pub use manual::run_manual;
pub use snapshots::run_snapshots;
pub use token::run_token;
pub use trigger::run_trigger;
