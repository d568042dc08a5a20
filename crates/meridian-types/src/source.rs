//! Quote provider capability.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{Bar, Interval, QuoteError};

/// A source of OHLC bars for one index on one calendar date.
///
/// Implemented by the remote quote client and the synthetic generator; the
/// provider resolver composes them through this trait only.
#[async_trait]
pub trait QuoteSource: Send + Sync + std::fmt::Debug {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Fetches the bars of `code` for `date` at `interval`.
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteError`] if the bars could not be obtained.
    async fn fetch(
        &self,
        code: &str,
        interval: Interval,
        date: NaiveDate,
    ) -> Result<Vec<Bar>, QuoteError>;
}
