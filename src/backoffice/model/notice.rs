use chrono::{DateTime, Utc};
use derive_more::Display;
use crate::backoffice::util::time::helper;

/// How long a notice stays visible unless dismissed earlier.
pub(crate) const NOTICE_TTL_SECS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub(crate) enum NoticeKind {
    #[display("info")]
    Info,
    #[display("success")]
    Success,
    #[display("error")]
    Error,
}

#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Transient, dismissable notifications raised by the screens.
#[derive(Debug, Default)]
pub(crate) struct Notices {
    next_id: u64,
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            kind,
            message: message.into(),
            created_at: helper::get_utc_now(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notice older than [`NOTICE_TTL_SECS`] at `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        self.items.retain(|n| (now - n.created_at).num_seconds() < NOTICE_TTL_SECS);
    }

    pub fn active(&self) -> &[Notice] {
        &self.items
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn notices_expire_after_ttl() {
        helper::set_utc_now(1_000);
        let mut notices = Notices::default();
        notices.push(NoticeKind::Error, "first");
        helper::set_utc_now(1_003);
        notices.push(NoticeKind::Success, "second");

        notices.expire(helper::get_utc_now());
        assert_eq!(notices.active().len(), 2);

        helper::set_utc_now(1_004);
        notices.expire(helper::get_utc_now());
        let left: Vec<_> = notices.active().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(left, vec!["second"]);
    }

    #[test]
    fn dismiss_by_id() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeKind::Info, "a");
        let b = notices.push(NoticeKind::Info, "b");
        assert_ne!(a, b);
        assert!(notices.dismiss(a));
        assert!(!notices.dismiss(a));
        assert_eq!(notices.active().len(), 1);
        assert!(notices.dismiss(b));
        assert!(notices.active().is_empty());
    }
}
