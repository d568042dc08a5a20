//! Reference-timeline normalization for the meridian session timeline engine.
//!
//! - [`TimeWindow`] - The fixed 24-hour display window of a date
//! - [`to_percent_series`] - Close-relative percentage transform
//! - [`overlay`] - Multi-index percentage overlay
//! - [`candles`] - Single-index candle view

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod percent;
mod window;

pub use candle::{CandleView, candles};
pub use percent::{Overlay, OverlaySeries, overlay, to_percent_series};
pub use window::TimeWindow;
