//! Timed notices, shown stacked in a corner until they expire.

use std::time::{Duration, Instant};

pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) {
        self.notices.push(Notice {
            kind,
            message: message.into(),
            expires_at: now + NOTICE_DURATION,
        });
    }

    /// Drop expired notices. Returns true when anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.expires_at > now);
        self.notices.len() != before
    }

    /// Earliest expiry, while any notice is showing.
    pub fn deadline(&self) -> Option<Instant> {
        self.notices.iter().map(|notice| notice.expires_at).min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
