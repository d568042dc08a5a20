//! Trading sessions on the reference timeline.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::IndexDef;

/// Returns midnight of `date` on the reference timeline.
#[must_use]
pub fn reference_midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Open and close instants of one index on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Market open instant.
    pub open: DateTime<Utc>,
    /// Market close instant.
    pub close: DateTime<Utc>,
}

impl Session {
    /// Computes the session of `index` on `date`.
    ///
    /// The close rolls to the next day when the closing hour is earlier than
    /// the opening hour. Minutes are ignored in that comparison, so a
    /// `23:50`-`23:40` session stays on the same day and ends before it opens.
    #[must_use]
    pub fn for_index(index: &IndexDef, date: NaiveDate) -> Self {
        let open = Utc.from_utc_datetime(&date.and_time(index.market_open()));
        let mut close = Utc.from_utc_datetime(&date.and_time(index.market_close()));

        if index.is_overnight() {
            close += TimeDelta::days(1);
        }

        Self { open, close }
    }

    /// Returns the session length. Negative for degenerate sessions.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.close - self.open
    }

    /// Returns true if `time` lies within `[open, close]`.
    #[must_use]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.open && time <= self.close
    }

    /// Returns true if the session closes on a later calendar date than it opens.
    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.close.date_naive() > self.open.date_naive()
    }

    /// Returns true if the session ends before it starts.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.close < self.open
    }
}

/// Computes the session of `index` on `date`.
#[must_use]
pub fn session_for(index: &IndexDef, date: NaiveDate) -> Session {
    Session::for_index(index, date)
}
