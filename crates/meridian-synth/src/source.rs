//! Synthetic quote source.

use async_trait::async_trait;
use chrono::NaiveDate;
use meridian_types::{Bar, Interval, QuoteError, QuoteSource};

use crate::SeriesGenerator;

/// [`QuoteSource`] backed by the deterministic [`SeriesGenerator`].
///
/// Never fails; unknown codes produce an empty series.
#[derive(Debug, Clone, Default)]
pub struct SyntheticQuoteSource {
    generator: SeriesGenerator,
}

impl SyntheticQuoteSource {
    /// Creates a source around the given generator.
    #[must_use]
    pub const fn new(generator: SeriesGenerator) -> Self {
        Self { generator }
    }

    /// Returns the underlying generator.
    #[must_use]
    pub const fn generator(&self) -> &SeriesGenerator {
        &self.generator
    }
}

#[async_trait]
impl QuoteSource for SyntheticQuoteSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn fetch(
        &self,
        code: &str,
        interval: Interval,
        date: NaiveDate,
    ) -> Result<Vec<Bar>, QuoteError> {
        Ok(self.generator.generate(code, interval, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_matches_generator() {
        let source = SyntheticQuoteSource::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let fetched = source.fetch("^HSI", Interval::Minute30, date).await.unwrap();
        let generated = source.generator().generate("^HSI", Interval::Minute30, date);
        assert_eq!(fetched, generated);
        assert_eq!(source.name(), "synthetic");
    }

    #[tokio::test]
    async fn test_unknown_code_is_not_an_error() {
        let source = SyntheticQuoteSource::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let bars = source.fetch("^NOPE", Interval::Hour1, date).await.unwrap();
        assert!(bars.is_empty());
    }
}
