//! Percentage-change overlay.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use meridian_types::{Bar, PercentPoint};
use serde::Serialize;
use tracing::{debug, warn};

use crate::TimeWindow;

/// Converts bars to close-relative percentage changes.
///
/// The first close is the base, so the first point is always zero.
#[must_use]
pub fn to_percent_series(bars: &[Bar]) -> Vec<PercentPoint> {
    let Some(first) = bars.first() else {
        return Vec::new();
    };
    let base = first.close;
    bars.iter()
        .map(|bar| PercentPoint::new(bar.time, (bar.close / base - 1.0) * 100.0))
        .collect()
}

/// Percentage series of one index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaySeries {
    /// Index code.
    pub code: String,
    /// Percentage points in time order.
    pub points: Vec<PercentPoint>,
}

/// Percentage overlay of several indices on one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// Display window.
    pub window: TimeWindow,
    /// Retained series in display order.
    pub series: Vec<OverlaySeries>,
}

impl Overlay {
    /// Returns the codes of the retained series.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.code.as_str())
    }

    /// Returns true if no series was retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns the number of retained series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }
}

/// Builds the percentage overlay of `codes`, in the given order.
///
/// Codes with no bars are dropped, as are series whose first close is not a
/// positive number (no percentage base exists).
pub fn overlay<'a, I>(date: NaiveDate, codes: I, raw: &BTreeMap<String, Vec<Bar>>) -> Overlay
where
    I: IntoIterator<Item = &'a str>,
{
    let series = codes
        .into_iter()
        .filter_map(|code| {
            let bars = raw.get(code).filter(|bars| !bars.is_empty());
            let Some(bars) = bars else {
                debug!(code, "no bars, dropping from overlay");
                return None;
            };
            let base = bars[0].close;
            if !(base.is_finite() && base > 0.0) {
                warn!(code, base, "unusable percentage base, dropping from overlay");
                return None;
            }
            Some(OverlaySeries {
                code: code.to_string(),
                points: to_percent_series(bars),
            })
        })
        .collect();

    Overlay {
        window: TimeWindow::for_date(date),
        series,
    }
}
