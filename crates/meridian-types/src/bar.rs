//! OHLC bar and percentage point data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLC bar (candlestick) data.
///
/// `value` always mirrors `close`; line views plot it directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar instant on the reference timeline.
    pub time: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Plotted value (equal to `close`).
    pub value: f64,
}

impl Bar {
    /// Creates a new bar with `value` set to `close`.
    #[must_use]
    pub const fn new(time: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            value: close,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if `high` and `low` bracket both `open` and `close`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.high >= self.open.max(self.close) && self.low <= self.open.min(self.close)
    }

    /// Returns true if no price is negative.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| *p >= 0.0)
    }

    /// Returns true if this is a bullish bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Close-relative percentage change at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentPoint {
    /// Instant on the reference timeline.
    pub time: DateTime<Utc>,
    /// Percentage change relative to the first bar's close.
    pub value: f64,
}

impl PercentPoint {
    /// Creates a new percentage point.
    #[must_use]
    pub const fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}
