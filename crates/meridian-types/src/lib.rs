//! Core types for the meridian market session timeline engine.
//!
//! This crate provides the fundamental data structures used throughout meridian:
//!
//! - [`IndexDef`] - Market index metadata with trading hours and region
//! - [`Bar`] - A single OHLC bar
//! - [`PercentPoint`] - Close-relative percentage change at an instant
//! - [`Session`] - An index's trading session on the reference timeline
//! - [`Interval`] - Bar interval vocabulary
//! - [`ViewParams`] - Per-render view parameters supplied by the UI boundary
//! - [`QuoteSource`] - Capability implemented by every data provider

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod index;
mod interval;
mod session;
mod source;
mod view;

pub use bar::{Bar, PercentPoint};
pub use error::{CatalogError, MeridianError, QuoteError, Result, UnknownVariant};
pub use index::{IndexDef, Region};
pub use interval::{Interval, IntervalParseError};
pub use session::{Session, reference_midnight, session_for};
pub use source::QuoteSource;
pub use view::{ChartMode, Provider, ViewParams};
