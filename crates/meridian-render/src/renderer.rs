//! View-to-chart render pipeline.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use meridian_catalog::IndexCatalog;
use meridian_chart::ChartConfigBuilder;
use meridian_resolve::ProviderResolver;
use meridian_timeline::{candles, overlay};
use meridian_types::{ChartMode, IndexDef, ViewParams};
use tracing::{debug, info, warn};

use crate::{ChartSink, LegendEntry, RenderOutcome, RenderState, Rendered};

/// Runs renders and discards the ones overtaken by a newer render.
///
/// Every call to [`render`](Self::render) takes a ticket from a generation
/// counter. Once its data is in, a render whose ticket is no longer the
/// newest is reported as [`Rendered::Superseded`].
#[derive(Debug)]
pub struct Renderer {
    resolver: ProviderResolver,
    catalog: Arc<IndexCatalog>,
    generation: AtomicU64,
}

impl Renderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(resolver: ProviderResolver, catalog: Arc<IndexCatalog>) -> Self {
        Self {
            resolver,
            catalog,
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &IndexCatalog {
        &self.catalog
    }

    /// Returns the resolver.
    #[must_use]
    pub const fn resolver(&self) -> &ProviderResolver {
        &self.resolver
    }

    /// Renders `params`.
    pub async fn render(&self, params: &ViewParams) -> Rendered {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let outcome = match params.mode {
            ChartMode::Line => self.render_overlay(params).await,
            ChartMode::Candle => self.render_candles(params).await,
        };

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "render superseded by a newer request");
            return Rendered::Superseded;
        }
        Rendered::Current(outcome)
    }

    /// Renders `params` and delivers the outcome to `sink` unless superseded.
    ///
    /// Returns true if the outcome was delivered.
    pub async fn render_into<S>(&self, params: &ViewParams, sink: &mut S) -> bool
    where
        S: ChartSink + ?Sized,
    {
        sink.loading(true);
        let rendered = self.render(params).await;
        sink.loading(false);
        match rendered {
            Rendered::Current(outcome) => {
                sink.show(outcome);
                true
            }
            Rendered::Superseded => false,
        }
    }

    async fn render_overlay(&self, params: &ViewParams) -> RenderOutcome {
        let selected = self.catalog.ordered(&params.selected_codes);
        let dropped = params.selected_codes.len() - selected.len();
        if dropped > 0 {
            debug!(dropped, "ignoring codes missing from the catalog");
        }

        if selected.is_empty() {
            return RenderOutcome {
                mode: ChartMode::Line,
                state: RenderState::empty_selection(),
                legend: Vec::new(),
            };
        }

        let codes: Vec<&str> = selected.iter().map(|i| i.code()).collect();
        let raw = self
            .resolver
            .resolve_all(codes.iter().copied(), params.interval, params.date, params.provider)
            .await;
        let overlay = overlay(params.date, codes.iter().copied(), &raw);

        let state = match ChartConfigBuilder::new(&self.catalog)
            .with_market_hours(params.show_market_hours)
            .overlay(&overlay)
        {
            Ok(config) => {
                info!(
                    series = overlay.len(),
                    interval = %params.interval,
                    date = %params.date,
                    "rendered overlay"
                );
                RenderState::Chart(config)
            }
            Err(e) => {
                warn!(error = %e, "failed to build overlay chart");
                RenderState::failed(e.to_string())
            }
        };

        let legend = selected
            .into_iter()
            .filter(|i| overlay.codes().any(|c| c == i.code()))
            .map(LegendEntry::from)
            .collect();

        RenderOutcome {
            mode: ChartMode::Line,
            state,
            legend,
        }
    }

    async fn render_candles(&self, params: &ViewParams) -> RenderOutcome {
        let code = params
            .candle_code
            .as_deref()
            .or_else(|| self.catalog.first().map(IndexDef::code));
        let Some(code) = code else {
            return RenderOutcome {
                mode: ChartMode::Candle,
                state: RenderState::empty_selection(),
                legend: Vec::new(),
            };
        };

        let bars = self
            .resolver
            .resolve(code, params.interval, params.date, params.provider)
            .await;
        let view = candles(params.date, code, &bars);

        let state = match ChartConfigBuilder::new(&self.catalog)
            .with_market_hours(params.show_market_hours)
            .candles(&view)
        {
            Ok(config) => {
                info!(code, bars = view.bars.len(), date = %params.date, "rendered candles");
                RenderState::Chart(config)
            }
            Err(e) => {
                warn!(code, error = %e, "failed to build candle chart");
                RenderState::failed(e.to_string())
            }
        };

        let legend = self
            .catalog
            .get(code)
            .map_or_else(|| LegendEntry::unknown(code), LegendEntry::from);

        RenderOutcome {
            mode: ChartMode::Candle,
            state,
            legend: vec![legend],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EMPTY_SELECTION_MESSAGE, FAILURE_MESSAGE, MemorySink};
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
    use meridian_chart::Series;
    use meridian_synth::SyntheticQuoteSource;
    use meridian_types::{Bar, Interval, QuoteError, QuoteSource};
    use std::time::Duration;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn renderer_with(source: Arc<dyn QuoteSource>) -> Renderer {
        Renderer::new(
            ProviderResolver::new(source),
            Arc::new(IndexCatalog::global().clone()),
        )
    }

    fn synthetic_renderer() -> Renderer {
        renderer_with(Arc::new(SyntheticQuoteSource::default()))
    }

    /// Returns flat bars, sleeping first for the listed code.
    #[derive(Debug)]
    struct DelayedSource {
        slow_code: &'static str,
        delay: Duration,
    }

    #[async_trait]
    impl QuoteSource for DelayedSource {
        fn name(&self) -> &'static str {
            "delayed"
        }

        async fn fetch(&self, code: &str, _: Interval, _: NaiveDate) -> Result<Vec<Bar>, QuoteError> {
            if code == self.slow_code {
                tokio::time::sleep(self.delay).await;
            }
            let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
            Ok(vec![Bar::new(t, 100.0, 100.0, 100.0, 100.0)])
        }
    }

    /// Returns a series whose second close is not a number.
    #[derive(Debug)]
    struct CorruptSource;

    #[async_trait]
    impl QuoteSource for CorruptSource {
        fn name(&self) -> &'static str {
            "corrupt"
        }

        async fn fetch(&self, _: &str, _: Interval, _: NaiveDate) -> Result<Vec<Bar>, QuoteError> {
            let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
            Ok(vec![
                Bar::new(t, 100.0, 100.0, 100.0, 100.0),
                Bar::new(t + TimeDelta::minutes(5), 100.0, 100.0, 100.0, f64::NAN),
            ])
        }
    }

    #[tokio::test]
    async fn test_empty_selection() {
        let renderer = synthetic_renderer();
        let outcome = renderer
            .render(&ViewParams::new(date()))
            .await
            .into_current()
            .unwrap();
        assert_eq!(
            outcome.state,
            RenderState::EmptySelection {
                message: EMPTY_SELECTION_MESSAGE.to_string()
            }
        );
        assert!(outcome.legend.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_codes_are_dropped() {
        let renderer = synthetic_renderer();
        let params = ViewParams::new(date()).with_selection(["^NOPE"]);
        let outcome = renderer.render(&params).await.into_current().unwrap();
        assert!(matches!(outcome.state, RenderState::EmptySelection { .. }));

        let params = ViewParams::new(date()).with_selection(["^NOPE", "^N225"]);
        let outcome = renderer.render(&params).await.into_current().unwrap();
        let codes: Vec<_> = outcome.legend.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["^N225"]);
    }

    #[tokio::test]
    async fn test_overlay_in_catalog_order() {
        let renderer = synthetic_renderer();
        let params = ViewParams::new(date())
            .with_interval(Interval::Hour1)
            .with_selection(["^GSPC", "^AXJO", "^FTSE"]);
        let outcome = renderer.render(&params).await.into_current().unwrap();

        let config = outcome.state.chart().unwrap();
        let names: Vec<_> = config.series.iter().map(Series::name).collect();
        assert_eq!(names, vec!["ASX 200 (Australia)", "FTSE 100 (UK)", "S&P 500 (US)"]);
        let legend: Vec<_> = outcome.legend.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(legend, vec!["^AXJO", "^FTSE", "^GSPC"]);
    }

    #[tokio::test]
    async fn test_candle_defaults_to_first_index() {
        let renderer = synthetic_renderer();
        let params = ViewParams::new(date())
            .with_mode(ChartMode::Candle)
            .with_interval(Interval::Hour1);
        let outcome = renderer.render(&params).await.into_current().unwrap();

        assert_eq!(outcome.mode, ChartMode::Candle);
        assert_eq!(outcome.legend[0].code, "^AXJO");
        let config = outcome.state.chart().unwrap();
        assert_eq!(config.series.len(), 2);
        assert_eq!(config.series[0].len(), 7);
    }

    #[tokio::test]
    async fn test_candle_unknown_code() {
        let renderer = synthetic_renderer();
        let params = ViewParams::new(date())
            .with_mode(ChartMode::Candle)
            .with_candle_code("^XYZ");
        let outcome = renderer.render(&params).await.into_current().unwrap();

        assert!(outcome.state.chart().unwrap().series.is_empty());
        assert_eq!(outcome.legend, vec![LegendEntry::unknown("^XYZ")]);
    }

    #[tokio::test]
    async fn test_failure_then_recovery() {
        let renderer = renderer_with(Arc::new(CorruptSource));
        let params = ViewParams::new(date()).with_selection(["^AXJO"]);
        let outcome = renderer.render(&params).await.into_current().unwrap();

        let RenderState::Failed { message, detail } = &outcome.state else {
            panic!("expected a failure, got {:?}", outcome.state);
        };
        assert_eq!(message, FAILURE_MESSAGE);
        assert!(detail.contains("Non-finite"));

        // The renderer keeps working after a failure.
        let outcome = renderer
            .render(&ViewParams::new(date()))
            .await
            .into_current()
            .unwrap();
        assert!(matches!(outcome.state, RenderState::EmptySelection { .. }));
    }

    #[tokio::test]
    async fn test_stale_render_is_superseded() {
        let renderer = renderer_with(Arc::new(DelayedSource {
            slow_code: "^FTSE",
            delay: Duration::from_millis(100),
        }));
        let slow = ViewParams::new(date()).with_selection(["^FTSE"]);
        let fast = ViewParams::new(date()).with_selection(["^AXJO"]);

        let (first, second) = tokio::join!(renderer.render(&slow), renderer.render(&fast));

        assert!(first.is_superseded());
        let outcome = second.into_current().unwrap();
        assert_eq!(outcome.legend[0].code, "^AXJO");
    }

    #[tokio::test]
    async fn test_sink_receives_only_current_renders() {
        let renderer = renderer_with(Arc::new(DelayedSource {
            slow_code: "^FTSE",
            delay: Duration::from_millis(100),
        }));
        let slow = ViewParams::new(date()).with_selection(["^FTSE"]);
        let fast = ViewParams::new(date()).with_selection(["^AXJO"]);

        let mut stale_sink = MemorySink::new();
        let mut fresh_sink = MemorySink::new();
        let (stale, fresh) = tokio::join!(
            renderer.render_into(&slow, &mut stale_sink),
            renderer.render_into(&fast, &mut fresh_sink)
        );

        assert!(!stale);
        assert!(fresh);
        assert!(stale_sink.latest().is_none());
        assert!(!stale_sink.is_loading());
        assert_eq!(fresh_sink.outcomes().len(), 1);
    }
}
