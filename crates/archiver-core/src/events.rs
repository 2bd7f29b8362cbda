//! Host lifecycle events that may trigger a capture.
//!
//! The host's own event system (save hooks, profile updates, ...) maps its
//! events onto `ContentEvent` and hands them to `Archiver::handle_event`.

use crate::error::ArchiverError;

/// Publication state of a post at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    Published,
    Draft,
    Pending,
    Private,
    Trashed,
}

/// Content change reported by the host, identified by its public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    /// A post or page was saved.
    PostSaved {
        permalink: String,
        status: PostStatus,
        is_revision: bool,
    },
    /// A taxonomy term was edited.
    TermEdited { link: String },
    /// A user profile was updated; `link` is the author archive page.
    ProfileUpdated { link: String },
}

/// Why an event did not produce a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotPublished,
    Revision,
    /// Site runs on a local address and local archiving is disabled.
    LocalAddress,
}

/// Result of handling one event.
#[derive(Debug)]
pub enum EventOutcome {
    Skipped(SkipReason),
    Triggered(Result<String, ArchiverError>),
}

impl ContentEvent {
    /// Public URL of the content the event refers to.
    pub fn url(&self) -> &str {
        match self {
            ContentEvent::PostSaved { permalink, .. } => permalink,
            ContentEvent::TermEdited { link } | ContentEvent::ProfileUpdated { link } => link,
        }
    }

    /// Reason to ignore this event regardless of configuration, if any.
    /// Only published, non-revision posts are archived.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            ContentEvent::PostSaved {
                is_revision: true, ..
            } => Some(SkipReason::Revision),
            ContentEvent::PostSaved { status, .. } if *status != PostStatus::Published => {
                Some(SkipReason::NotPublished)
            }
            _ => None,
        }
    }
}
