//! Normalize world market index sessions onto a shared 24-hour timeline.
//!
//! This is a facade crate that re-exports functionality from the meridian
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use meridian_lib::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(IndexCatalog::global().clone());
//!     let resolver = ProviderResolver::new(Arc::new(SyntheticQuoteSource::default()));
//!     let renderer = Renderer::new(resolver, catalog);
//!
//!     let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!     let params = ViewParams::new(date).with_selection(["^AXJO", "^N225"]);
//!
//!     if let Some(outcome) = renderer.render(&params).await.into_current() {
//!         JsonWriter::new().write(&outcome, std::io::stdout())?;
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use meridian_types::*;

// Re-export the index catalog
pub use meridian_catalog::{IndexCatalog, MarketHours, Selection};

// Re-export synthetic data
pub use meridian_synth::{SeriesGenerator, SyntheticQuoteSource, WalkParams};

// Re-export provider resolution
pub use meridian_resolve::{DEFAULT_CONCURRENCY, ProviderResolver};

// Re-export timeline normalization
pub use meridian_timeline::{
    CandleView, Overlay, OverlaySeries, TimeWindow, candles, overlay, to_percent_series,
};

// Re-export chart configuration
pub use meridian_chart::{
    ChartConfig, ChartConfigBuilder, ChartError, JsonWriter, format_axis_label,
    format_candle_tooltip, format_percent,
};

// Re-export the remote client
#[cfg(feature = "remote")]
pub use meridian_fetch::{
    ClientBuildError, ClientConfig, HealthStatus, RemoteQuoteClient, RemoteQuoteSource, SymbolList,
};

// Re-export the render pipeline
#[cfg(feature = "render")]
pub use meridian_render::{
    ChartSink, EMPTY_SELECTION_MESSAGE, FAILURE_MESSAGE, LegendEntry, MemorySink, RenderOutcome,
    RenderState, Rendered, Renderer,
};

/// Prelude module for convenient imports.
///
/// ```
/// use meridian_lib::prelude::*;
/// ```
pub mod prelude {
    pub use std::sync::Arc;

    pub use meridian_types::{
        Bar, ChartMode, IndexDef, Interval, MeridianError, PercentPoint, Provider, QuoteError,
        QuoteSource, Region, Result, Session, ViewParams,
    };

    pub use meridian_catalog::{IndexCatalog, Selection};

    pub use meridian_synth::{SeriesGenerator, SyntheticQuoteSource};

    pub use meridian_resolve::ProviderResolver;

    pub use meridian_timeline::{CandleView, Overlay, TimeWindow, candles, overlay};

    pub use meridian_chart::{ChartConfig, ChartConfigBuilder, JsonWriter};

    #[cfg(feature = "remote")]
    pub use meridian_fetch::{ClientConfig, RemoteQuoteClient, RemoteQuoteSource};

    #[cfg(feature = "render")]
    pub use meridian_render::{ChartSink, RenderOutcome, RenderState, Rendered, Renderer};
}

#[cfg(all(test, feature = "render"))]
mod tests {
    use super::prelude::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_prelude_renders_overlay() {
        let renderer = Renderer::new(
            ProviderResolver::new(Arc::new(SyntheticQuoteSource::default())),
            Arc::new(IndexCatalog::global().clone()),
        );
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let params = ViewParams::new(date)
            .with_interval(Interval::Minute15)
            .with_selection(["^AXJO", "^N225"]);

        let outcome = renderer.render(&params).await.into_current().unwrap();
        let config = outcome.state.chart().unwrap();
        assert_eq!(config.series.len(), 2);

        let json = JsonWriter::new().to_string(&outcome).unwrap();
        assert!(json.contains("\"state\":\"chart\""));
    }
}
