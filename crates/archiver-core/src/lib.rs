pub mod config;
pub mod logging;

pub mod archiver;
pub mod error;
pub mod events;
pub mod http;
pub mod local;
pub mod manual;
pub mod nonce;
pub mod query;
pub mod trigger;
pub mod view;

pub use archiver::Archiver;
pub use error::ArchiverError;
pub use query::SnapshotRecord;
