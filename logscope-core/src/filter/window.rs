use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Inclusive time bounds. An absent side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub from: Option<DateTime<FixedOffset>>,
    pub to: Option<DateTime<FixedOffset>>,
}

impl TimeWindow {
    pub fn new(from: Option<DateTime<FixedOffset>>, to: Option<DateTime<FixedOffset>>) -> Self {
        Self { from, to }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Rejects only instants strictly before `from` or strictly after `to`.
    pub fn contains(&self, ts: &DateTime<FixedOffset>) -> bool {
        if self.from.is_some_and(|from| *ts < from) {
            return false;
        }
        if self.to.is_some_and(|to| *ts > to) {
            return false;
        }
        true
    }
}
