//! Remote-then-synthetic provider resolution.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use meridian_types::{Bar, Interval, Provider, QuoteSource};
use tracing::{debug, warn};

/// Default number of symbols resolved concurrently.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Resolves bars from the preferred provider.
///
/// The remote source is attempted at most once per symbol. Any failure is
/// logged and replaced by the synthetic series for the same arguments; the
/// caller never sees the remote error.
#[derive(Debug, Clone)]
pub struct ProviderResolver {
    synthetic: Arc<dyn QuoteSource>,
    remote: Option<Arc<dyn QuoteSource>>,
    concurrency: usize,
}

impl ProviderResolver {
    /// Creates a resolver with only a synthetic source.
    #[must_use]
    pub fn new(synthetic: Arc<dyn QuoteSource>) -> Self {
        Self {
            synthetic,
            remote: None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Adds the remote source used for [`Provider::Remote`].
    #[must_use]
    pub fn with_remote(mut self, remote: Arc<dyn QuoteSource>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Sets the number of symbols resolved concurrently (at least one).
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns true if a remote source is configured.
    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Returns the concurrency limit of [`resolve_all`](Self::resolve_all).
    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Resolves the bars of one symbol.
    pub async fn resolve(
        &self,
        code: &str,
        interval: Interval,
        date: NaiveDate,
        provider: Provider,
    ) -> Vec<Bar> {
        if provider == Provider::Remote {
            match &self.remote {
                Some(remote) => match remote.fetch(code, interval, date).await {
                    Ok(bars) => {
                        debug!(code, source = remote.name(), bars = bars.len(), "resolved");
                        return bars;
                    }
                    Err(e) => {
                        warn!(
                            code,
                            source = remote.name(),
                            error = %e,
                            "remote fetch failed, falling back to synthetic data"
                        );
                    }
                },
                None => warn!(code, "no remote source configured, using synthetic data"),
            }
        }

        self.synthesize(code, interval, date).await
    }

    /// Resolves the bars of several symbols concurrently.
    ///
    /// Results are keyed by symbol. A failure for one symbol never affects
    /// the others.
    pub async fn resolve_all<I, S>(
        &self,
        codes: I,
        interval: Interval,
        date: NaiveDate,
        provider: Provider,
    ) -> BTreeMap<String, Vec<Bar>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        stream::iter(codes.into_iter().map(Into::into))
            .map(|code: String| async move {
                let bars = self.resolve(&code, interval, date, provider).await;
                (code, bars)
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await
    }

    async fn synthesize(&self, code: &str, interval: Interval, date: NaiveDate) -> Vec<Bar> {
        match self.synthetic.fetch(code, interval, date).await {
            Ok(bars) => bars,
            Err(e) => {
                warn!(code, source = self.synthetic.name(), error = %e, "synthetic source failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use meridian_synth::{SeriesGenerator, SyntheticQuoteSource};
    use meridian_types::QuoteError;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Remote double: fails for listed codes, returns a fixed series otherwise.
    #[derive(Debug, Default)]
    struct ScriptedRemote {
        failing: HashSet<String>,
        calls: AtomicUsize,
    }

    impl ScriptedRemote {
        fn failing(codes: &[&str]) -> Self {
            Self {
                failing: codes.iter().map(|c| (*c).to_string()).collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn fixed_bars() -> Vec<Bar> {
            let t = Utc.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap();
            vec![Bar::new(t, 100.0, 101.0, 99.0, 100.5)]
        }
    }

    #[async_trait]
    impl QuoteSource for ScriptedRemote {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn fetch(&self, code: &str, _: Interval, _: NaiveDate) -> Result<Vec<Bar>, QuoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.contains(code) {
                Err(QuoteError::Transport("HTTP 503: Service Unavailable".into()))
            } else {
                Ok(Self::fixed_bars())
            }
        }
    }

    /// Source that records how many fetches are in flight at once.
    #[derive(Debug, Default)]
    struct SlowSource {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl QuoteSource for SlowSource {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn fetch(&self, _: &str, _: Interval, _: NaiveDate) -> Result<Vec<Bar>, QuoteError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[derive(Debug)]
    struct BrokenSource;

    #[async_trait]
    impl QuoteSource for BrokenSource {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn fetch(&self, _: &str, _: Interval, _: NaiveDate) -> Result<Vec<Bar>, QuoteError> {
            Err(QuoteError::Data("unavailable".into()))
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn synthetic() -> Arc<dyn QuoteSource> {
        Arc::new(SyntheticQuoteSource::default())
    }

    #[tokio::test]
    async fn test_fallback_matches_standalone_generation() {
        let remote = Arc::new(ScriptedRemote::failing(&["^FTSE"]));
        let resolver = ProviderResolver::new(synthetic()).with_remote(remote.clone());

        let results = resolver
            .resolve_all(["^FTSE", "^N225"], Interval::Minute15, date(), Provider::Remote)
            .await;

        let expected = SeriesGenerator::default().generate("^FTSE", Interval::Minute15, date());
        assert_eq!(results["^FTSE"], expected);
        assert_eq!(results["^N225"], ScriptedRemote::fixed_bars());
        assert_eq!(remote.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_remote_attempted_once() {
        let remote = Arc::new(ScriptedRemote::failing(&["^HSI"]));
        let resolver = ProviderResolver::new(synthetic()).with_remote(remote.clone());

        let bars = resolver.resolve("^HSI", Interval::Hour1, date(), Provider::Remote).await;
        assert!(!bars.is_empty());
        assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_demo_skips_remote() {
        let remote = Arc::new(ScriptedRemote::default());
        let resolver = ProviderResolver::new(synthetic()).with_remote(remote.clone());

        let results = resolver
            .resolve_all(["^AXJO", "^DJI"], Interval::Hour1, date(), Provider::Demo)
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remote_without_source_uses_synthetic() {
        let resolver = ProviderResolver::new(synthetic());
        assert!(!resolver.has_remote());

        let bars = resolver.resolve("^GSPC", Interval::Hour1, date(), Provider::Remote).await;
        let expected = SeriesGenerator::default().generate("^GSPC", Interval::Hour1, date());
        assert_eq!(bars, expected);
    }

    #[tokio::test]
    async fn test_synthetic_failure_is_absorbed() {
        let resolver = ProviderResolver::new(Arc::new(BrokenSource));
        let bars = resolver.resolve("^GSPC", Interval::Hour1, date(), Provider::Demo).await;
        assert!(bars.is_empty());
    }

    #[tokio::test]
    async fn test_empty_selection_resolves_nothing() {
        let resolver = ProviderResolver::new(synthetic());
        let results = resolver
            .resolve_all(Vec::<String>::new(), Interval::Hour1, date(), Provider::Demo)
            .await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_fan_out_is_concurrent_and_bounded() {
        let slow = Arc::new(SlowSource::default());
        let resolver = ProviderResolver::new(slow.clone()).with_concurrency(2);

        let results = resolver
            .resolve_all(["A", "B", "C", "D"], Interval::Hour1, date(), Provider::Demo)
            .await;
        assert_eq!(results.len(), 4);
        assert_eq!(slow.peak.load(Ordering::SeqCst), 2);
    }
}
