//! Render pipeline for the meridian session timeline engine.
//!
//! - [`Renderer`] - Turns [`ViewParams`](meridian_types::ViewParams) into a
//!   [`RenderOutcome`]
//! - [`RenderState`] - Chart, empty selection, or failure
//! - [`ChartSink`] - Consumer of render outcomes

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod outcome;
mod renderer;
mod sink;

pub use outcome::{
    EMPTY_SELECTION_MESSAGE, FAILURE_MESSAGE, LEGEND_FALLBACK_COLOR, LegendEntry, RenderOutcome,
    RenderState, Rendered,
};
pub use renderer::Renderer;
pub use sink::{ChartSink, MemorySink};
