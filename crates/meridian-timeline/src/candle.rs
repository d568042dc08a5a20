//! Single-index candlestick view.

use chrono::NaiveDate;
use meridian_types::Bar;
use serde::Serialize;

use crate::TimeWindow;

/// Candlestick bars of one index on the shared window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleView {
    /// Display window.
    pub window: TimeWindow,
    /// Index code.
    pub code: String,
    /// Bars in time order, prices untransformed.
    pub bars: Vec<Bar>,
}

impl CandleView {
    /// Returns true if the view has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Builds the candlestick view of `code` from its raw bars.
#[must_use]
pub fn candles(date: NaiveDate, code: &str, bars: &[Bar]) -> CandleView {
    CandleView {
        window: TimeWindow::for_date(date),
        code: code.to_string(),
        bars: bars.to_vec(),
    }
}
