//! Declarative chart configuration for the meridian session timeline engine.
//!
//! - [`ChartConfigBuilder`] - Assembles overlay and candle configurations
//! - [`ChartConfig`] - Serializable chart description handed to the widget
//! - [`JsonWriter`] - Compact or pretty JSON output
//! - [`format_axis_label`], [`format_percent`], [`format_candle_tooltip`] -
//!   Label helpers for chart sinks

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builder;
mod config;
mod format;
mod json;

pub use builder::{CANDLE_FALLBACK_COLOR, CLOSE_LINE_COLOR, ChartConfigBuilder, ChartError};
pub use config::{
    Annotation, AxisLabel, CandleEntry, CandlestickSeries, ChartConfig, DataZoom, Grid, LinePoint,
    LineSeries, LineStyle, Series, TimeAxis, Tooltip, TooltipFormat, ValueAxis,
};
pub use format::{AXIS_LABEL_FORMAT, format_axis_label, format_candle_tooltip, format_percent};
pub use json::JsonWriter;
