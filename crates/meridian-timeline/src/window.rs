//! The shared 24-hour display window.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use meridian_types::{Session, reference_midnight};
use serde::{Deserialize, Serialize};

/// Half-open window `[date 00:00, date+1 00:00)` on the reference timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (inclusive).
    pub start: DateTime<Utc>,
    /// Window end (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Returns the window of `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let start = reference_midnight(date);
        Self {
            start,
            end: start + TimeDelta::days(1),
        }
    }

    /// Returns true if `time` lies inside the window.
    #[must_use]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.start && time < self.end
    }

    /// Returns the window length.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns the part of `session` that overlaps the window, if any.
    #[must_use]
    pub fn clip(&self, session: &Session) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = session.open.max(self.start);
        let end = session.close.min(self.end);
        (start < end).then_some((start, end))
    }
}
