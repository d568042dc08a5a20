//! Bar interval definitions.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bar interval as offered by the view controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 5-minute bars.
    #[serde(rename = "5min")]
    Minute5,
    /// 15-minute bars.
    #[serde(rename = "15min")]
    Minute15,
    /// 30-minute bars.
    #[serde(rename = "30min")]
    Minute30,
    /// 1-hour bars.
    #[serde(rename = "1h")]
    Hour1,
    /// 4-hour bars.
    #[serde(rename = "4h")]
    Hour4,
    /// Daily bars.
    #[default]
    #[serde(rename = "1day")]
    Day1,
    /// Weekly bars.
    #[serde(rename = "1week")]
    Week1,
    /// Monthly bars (fixed 30 days).
    #[serde(rename = "1month")]
    Month1,
}

impl Interval {
    /// Returns the interval length in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        match self {
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Minute30 => 1800,
            Self::Hour1 => 3600,
            Self::Hour4 => 14_400,
            Self::Day1 => 86_400,
            Self::Week1 => 7 * 86_400,
            Self::Month1 => 30 * 86_400,
        }
    }

    /// Returns the interval length as a time delta.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.seconds())
    }

    /// Returns true for intervals shorter than a day.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        self.seconds() < 86_400
    }

    /// Returns the interval as its UI keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute5 => "5min",
            Self::Minute15 => "15min",
            Self::Minute30 => "30min",
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Day1 => "1day",
            Self::Week1 => "1week",
            Self::Month1 => "1month",
        }
    }

    /// Returns all available intervals, finest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute5,
            Self::Minute15,
            Self::Minute30,
            Self::Hour1,
            Self::Hour4,
            Self::Day1,
            Self::Week1,
            Self::Month1,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "5min" | "5m" | "m5" => Ok(Self::Minute5),
            "15min" | "15m" | "m15" => Ok(Self::Minute15),
            "30min" | "30m" | "m30" => Ok(Self::Minute30),
            "1h" | "h1" | "hour" => Ok(Self::Hour1),
            "4h" | "h4" => Ok(Self::Hour4),
            "1day" | "1d" | "d1" | "day" | "daily" => Ok(Self::Day1),
            "1week" | "1w" | "w1" | "week" | "weekly" => Ok(Self::Week1),
            "1month" | "1mo" | "month" | "monthly" => Ok(Self::Month1),
            _ => Err(IntervalParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected one of: 5min, 15min, 30min, 1h, 4h, 1day, 1week, 1month",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}
